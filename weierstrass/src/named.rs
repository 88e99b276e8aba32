//! Standard prime-order curves with their base points.
//!
//! These are ordinary [`Curve`] values and go through the same generic
//! arithmetic as any other curve. They exist for interoperability checks and
//! as large test inputs, not for production cryptography.

use crate::{Curve, Point};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};

/// Curve together with a distinguished base point and its order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedCurve {
    name: &'static str,
    curve: Curve,
    gx: BigInt,
    gy: BigInt,
    order: BigInt,
}

impl NamedCurve {
    fn from_be_bytes(
        name: &'static str,
        a: &[u8],
        b: &[u8],
        p: &[u8],
        gx: &[u8],
        gy: &[u8],
        order: &[u8],
    ) -> Self {
        let uint = |bytes: &[u8]| BigInt::from_bytes_be(Sign::Plus, bytes);

        Self {
            name,
            curve: Curve::from_parts(uint(a), uint(b), uint(p)),
            gx: uint(gx),
            gy: uint(gy),
            order: uint(order),
        }
    }

    /// Conventional name of the curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base point `G`.
    pub fn generator(&self) -> Point<'_> {
        Point::affine(&self.curve, self.gx.clone(), self.gy.clone())
    }

    /// Order of the base point, which is also the order of the whole group
    /// since all three curves have cofactor 1.
    pub fn order(&self) -> &BigInt {
        &self.order
    }
}

/// NIST P-224 (secp224r1).
///
/// `p ≡ 1 (mod 8)`, so lifting points on this curve goes through
/// Tonelli-Shanks.
pub fn nist_p224() -> NamedCurve {
    NamedCurve::from_be_bytes(
        "P-224",
        &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
        &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    )
}

/// NIST P-256 (secp256r1).
pub fn nist_p256() -> NamedCurve {
    NamedCurve::from_be_bytes(
        "P-256",
        &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    )
}

/// SECG secp256k1.
pub fn secp256k1() -> NamedCurve {
    NamedCurve::from_be_bytes(
        "secp256k1",
        &[0],
        &[7],
        &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    )
}
