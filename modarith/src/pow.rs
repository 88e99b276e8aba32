//! Modular exponentiation and 2-adic decomposition.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Computes `base^exponent mod modulus` by binary square-and-multiply.
///
/// The result lies in `[0, modulus)`. Uses `O(log exponent)` modular
/// multiplications.
///
/// # Panics
///
/// Panics if `exponent` is negative or `modulus` is not positive, in the same
/// way as [`BigInt::modpow`].
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
    assert!(!exponent.is_negative(), "negative exponent");
    assert!(modulus.is_positive(), "modulus must be positive");

    let mut result = BigInt::one().mod_floor(modulus);
    let mut square = base.mod_floor(modulus);
    let mut e = exponent.clone();

    loop {
        if e.is_odd() {
            result = (&result * &square).mod_floor(modulus);
        }

        e >>= 1u32;
        if e.is_zero() {
            return result;
        }

        square = (&square * &square).mod_floor(modulus);
    }
}

/// Splits `n` into `(k, q)` such that `n = 2^k · q` with `q` odd.
///
/// The sign of `n` is carried by `q`.
///
/// # Panics
///
/// Panics if `n` is zero, which has no odd part.
pub fn odd_part(n: &BigInt) -> (u64, BigInt) {
    match n.trailing_zeros() {
        Some(k) => (k, n >> k),
        None => panic!("zero has no odd part"),
    }
}
