//! Euclid's algorithm and modular inversion.
//!
//! All remainders use floor semantics (`num_integer::Integer::mod_floor`), so
//! signed inputs behave as in mathematical convention: the remainder takes the
//! sign of the divisor.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Bézout coefficients returned by [`extended_gcd`].
///
/// Satisfies `gcd = s·a + t·b`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bezout {
    /// Greatest common divisor of `a` and `b`.
    pub gcd: BigInt,

    /// Coefficient of `a`.
    pub s: BigInt,

    /// Coefficient of `b`.
    pub t: BigInt,
}

/// Greatest common divisor of `a` and `b`, with `gcd(a, 0) = a`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut r0 = a.clone();
    let mut r1 = b.clone();

    while !r1.is_zero() {
        let r2 = r0.mod_floor(&r1);
        r0 = r1;
        r1 = r2;
    }

    r0
}

/// Extended Euclidean algorithm.
///
/// Walks the remainder sequence `r₀ = a, r₁ = b, rᵢ₊₂ = rᵢ mod rᵢ₊₁` keeping
/// only the coefficients of `a`. The coefficient of `b` follows from
/// `t = (d - s·a) / b`, which is exact.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> Bezout {
    if b.is_zero() {
        return Bezout {
            gcd: a.clone(),
            s: BigInt::one(),
            t: BigInt::zero(),
        };
    }

    let (mut s0, mut s1) = (BigInt::one(), BigInt::zero());
    let (mut r0, mut r1) = (a.clone(), b.clone());

    while !r1.is_zero() {
        let (q, r2) = r0.div_mod_floor(&r1);
        let s2 = &s0 - &q * &s1;
        s0 = s1;
        s1 = s2;
        r0 = r1;
        r1 = r2;
    }

    let t = (&r0 - &s0 * a).div_floor(b);

    Bezout {
        gcd: r0,
        s: s0,
        t,
    }
}

/// Inverse of `a` modulo `m`, in `[0, m)`.
///
/// Returns [`Error::NotInvertible`] if `a` and `m` are not coprime and
/// [`Error::InvalidModulus`] if `m` is not positive.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() {
        return Err(Error::InvalidModulus(m.clone()));
    }

    let Bezout { gcd, t, .. } = extended_gcd(m, a);

    if gcd.is_one() {
        Ok(t.mod_floor(m))
    } else if (-&gcd).is_one() {
        Ok((-t).mod_floor(m))
    } else {
        Err(Error::NotInvertible {
            a: a.clone(),
            m: m.clone(),
        })
    }
}
