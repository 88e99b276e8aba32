//! Square roots modulo an odd prime.

use crate::{jacobi::residue, jacobi_symbol, mod_pow, odd_part};
use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Algorithm {
    /// Single exponentiation for `p ≡ 3 (mod 4)`.
    ThreeModFour,

    /// Exponentiation with a correction by a power of two for `p ≡ 5 (mod 8)`.
    FiveModEight,

    /// Tonelli-Shanks algorithm, needed for `p ≡ 1 (mod 8)`.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the algorithm to use for a particular odd modulus.
    pub fn for_modulus(p: &BigInt) -> Self {
        match residue(p, 8) {
            3 | 7 => Self::ThreeModFour,
            5 => Self::FiveModEight,
            _ => Self::TonelliShanks,
        }
    }
}

/// Returns `x` with `x² ≡ a (mod p)`.
///
/// The caller must ensure `p` is an odd prime and `a` is a quadratic residue
/// modulo `p`, i.e. `jacobi_symbol(a, p)` is [`JacobiSymbol::One`] or `a ≡ 0`.
/// Neither condition is checked: on a non-residue the returned value is
/// meaningless, and for a composite `p ≡ 1 (mod 8)` without quadratic
/// non-residues the search below never finishes.
///
/// `rng` is only consulted for `p ≡ 1 (mod 8)`, to search for a quadratic
/// non-residue. Seeding it makes the result reproducible.
///
/// [`JacobiSymbol::One`]: crate::JacobiSymbol::One
pub fn sqrt_mod_p<R>(a: &BigInt, p: &BigInt, rng: &mut R) -> BigInt
where
    R: RngCore + ?Sized,
{
    if p.is_one() {
        return BigInt::zero();
    }

    let a = a.mod_floor(p);
    let algorithm = Algorithm::for_modulus(p);
    tracing::trace!(?algorithm, %p, "modular square root");

    match algorithm {
        Algorithm::ThreeModFour => sqrt_three_mod_four(&a, p),
        Algorithm::FiveModEight => sqrt_five_mod_eight(&a, p),
        Algorithm::TonelliShanks => sqrt_tonelli_shanks(&a, p, rng),
    }
}

/// For `p ≡ 3 (mod 4)` the root is `a^((p + 1) / 4)`.
fn sqrt_three_mod_four(a: &BigInt, p: &BigInt) -> BigInt {
    mod_pow(a, &((p + 1u32) >> 2u32), p)
}

/// For `p ≡ 5 (mod 8)`, `a^((p + 3) / 8)` is a root of `a` or of `-a`. In the
/// second case multiplying by `2^((p - 1) / 4)`, a square root of `-1`, fixes it.
fn sqrt_five_mod_eight(a: &BigInt, p: &BigInt) -> BigInt {
    let x = mod_pow(a, &((p + 3u32) >> 3u32), p);

    if (&x * &x).mod_floor(p) == *a {
        x
    } else {
        let i = mod_pow(&BigInt::from(2u32), &((p - 1u32) >> 2u32), p);
        (x * i).mod_floor(p)
    }
}

/// Tonelli-Shanks for any odd prime.
///
/// With `p - 1 = 2^s·t` and a non-residue `d`, `D = d^t` generates the
/// 2-Sylow subgroup. The exponent `m` with `a^t · D^m = 1` is recovered one
/// bit at a time, and then `a^((t + 1) / 2) · D^(m / 2)` squares to `a`.
fn sqrt_tonelli_shanks<R>(a: &BigInt, p: &BigInt, rng: &mut R) -> BigInt
where
    R: RngCore + ?Sized,
{
    let d = find_non_residue(p, rng);
    let p_minus_1 = p - 1u32;
    let (s, t) = odd_part(&p_minus_1);

    let big_a = mod_pow(a, &t, p);
    let big_d = mod_pow(&d, &t, p);
    let mut m = BigInt::zero();

    for i in 0..s {
        let candidate = (&big_a * mod_pow(&big_d, &m, p)).mod_floor(p);
        let power = BigInt::one() << (s - 1 - i);

        if mod_pow(&candidate, &power, p) == p_minus_1 {
            m += BigInt::one() << i;
        }
    }

    let root = mod_pow(a, &((&t + 1u32) >> 1u32), p) * mod_pow(&big_d, &(m >> 1u32), p);
    root.mod_floor(p)
}

/// Finds a quadratic non-residue modulo `p`, starting with `2` and then
/// sampling uniformly from `[2, p)`.
fn find_non_residue<R>(p: &BigInt, rng: &mut R) -> BigInt
where
    R: RngCore + ?Sized,
{
    let lower = BigInt::from(2u32);
    let mut d = lower.clone();
    let mut attempts = 1u32;

    while !jacobi_symbol(&d, p).is_minus_one() {
        d = rng.gen_bigint_range(&lower, p);
        attempts += 1;
        tracing::trace!(attempts, "sampled candidate non-residue");
    }

    d
}
