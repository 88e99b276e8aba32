//! Jacobi symbol.

use crate::odd_part;
use core::ops::Neg;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Possible return values for [`jacobi_symbol`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i8)]
pub enum JacobiSymbol {
    /// `n` and `m` share a common factor.
    Zero = 0,

    /// `n` is a square modulo every prime factor of `m`, or a non-square
    /// modulo an even number of them.
    One = 1,

    /// `n` is a non-square modulo an odd number of prime factors of `m`.
    MinusOne = -1,
}

impl JacobiSymbol {
    /// Is this [`JacobiSymbol::One`]?
    pub fn is_one(self) -> bool {
        self == Self::One
    }

    /// Is this [`JacobiSymbol::MinusOne`]?
    pub fn is_minus_one(self) -> bool {
        self == Self::MinusOne
    }
}

impl From<JacobiSymbol> for i8 {
    fn from(symbol: JacobiSymbol) -> i8 {
        symbol as i8
    }
}

impl Neg for JacobiSymbol {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::MinusOne,
            Self::MinusOne => Self::One,
        }
    }
}

/// Computes the Jacobi symbol `(n / m)` for an integer `n` and an odd positive `m`.
///
/// Reduces `n` modulo `m`, strips factors of two using the supplementary law
/// for `(2 / m)`, then swaps the arguments by quadratic reciprocity. The
/// modulus strictly decreases on every swap.
///
/// # Panics
///
/// Panics if `m` is even or not positive.
pub fn jacobi_symbol(n: &BigInt, m: &BigInt) -> JacobiSymbol {
    assert!(
        m.is_positive() && m.is_odd(),
        "Jacobi symbol modulus must be odd and positive"
    );

    let mut n = n.clone();
    let mut m = m.clone();
    let mut result = JacobiSymbol::One;

    loop {
        if n.is_one() || m.is_one() {
            return result;
        }

        if n >= m || n.is_negative() {
            n = n.mod_floor(&m);
            continue;
        }

        if n.is_zero() {
            return JacobiSymbol::Zero;
        }

        let (k, q) = odd_part(&n);
        let m_mod_8 = residue(&m, 8);

        // (2 / m) = -1 exactly when m ≡ 3, 5 (mod 8)
        if k % 2 == 1 && (m_mod_8 == 3 || m_mod_8 == 5) {
            result = -result;
        }

        // reciprocity flips the sign when both are ≡ 3 (mod 4)
        if residue(&q, 4) == 3 && m_mod_8 % 4 == 3 {
            result = -result;
        }

        n = m;
        m = q;
    }
}

/// Residue of `n` modulo a small positive `d`.
pub(crate) fn residue(n: &BigInt, d: u32) -> u32 {
    n.mod_floor(&BigInt::from(d))
        .iter_u32_digits()
        .next()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{JacobiSymbol, jacobi_symbol};
    use num_bigint::BigInt;

    fn jac(n: i64, m: i64) -> i8 {
        jacobi_symbol(&BigInt::from(n), &BigInt::from(m)).into()
    }

    #[test]
    fn two_mod_seven() {
        assert_eq!(jac(2, 7), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(jac(1001, 9907), -1);
        assert_eq!(jac(19, 45), 1);
        assert_eq!(jac(8, 21), -1);
        assert_eq!(jac(5, 21), 1);
        assert_eq!(jac(30, 7), 1);
    }

    #[test]
    fn shared_factor_is_zero() {
        assert_eq!(jac(0, 7), 0);
        assert_eq!(jac(21, 7), 0);
        assert_eq!(jac(6, 15), 0);
    }

    #[test]
    fn negative_numerator() {
        // -1 is a square modulo p exactly when p ≡ 1 (mod 4)
        assert_eq!(jac(-1, 13), 1);
        assert_eq!(jac(-1, 11), -1);
    }

    #[test]
    fn modulus_one() {
        assert_eq!(jac(0, 1), 1);
        assert_eq!(jac(12345, 1), 1);
    }

    #[test]
    fn negation() {
        assert_eq!(-JacobiSymbol::One, JacobiSymbol::MinusOne);
        assert_eq!(-JacobiSymbol::MinusOne, JacobiSymbol::One);
        assert_eq!(-JacobiSymbol::Zero, JacobiSymbol::Zero);
    }

    #[test]
    #[should_panic(expected = "odd and positive")]
    fn even_modulus() {
        jac(3, 8);
    }
}
