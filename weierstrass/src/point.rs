//! Curve points and the chord-and-tangent group law.

use crate::{Curve, Error, Result};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Neg,
};
use modarith::mod_inverse;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Point on a short Weierstrass curve.
///
/// Affine coordinates are always held reduced to `[0, p)`. Every point keeps a
/// reference to its curve; combining points from different curves fails with
/// [`Error::CrossCurveOperation`].
#[derive(Clone, Debug)]
pub enum Point<'c> {
    /// The point at infinity, neutral element of the group.
    Identity(&'c Curve),

    /// Finite point `(x, y)`.
    Affine {
        /// Curve this point lies on.
        curve: &'c Curve,
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl<'c> Point<'c> {
    /// Create the point `(x, y)` on `curve`, reducing both coordinates modulo `p`.
    ///
    /// When `verify` is set, returns [`Error::PointNotOnCurve`] unless
    /// `y² ≡ x³ + ax + b (mod p)`.
    pub fn new(
        curve: &'c Curve,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        verify: bool,
    ) -> Result<Self> {
        let point = Self::affine(curve, x.into(), y.into());

        match &point {
            Self::Affine { x, y, .. } if verify && !curve.contains(x, y) => {
                Err(Error::PointNotOnCurve {
                    x: x.clone(),
                    y: y.clone(),
                })
            }
            _ => Ok(point),
        }
    }

    /// Build an affine point without checking the curve equation.
    pub(crate) fn affine(curve: &'c Curve, x: BigInt, y: BigInt) -> Self {
        let p = curve.p();

        Self::Affine {
            curve,
            x: x.mod_floor(p),
            y: y.mod_floor(p),
        }
    }

    /// Additive identity of the group on `curve`.
    pub fn identity(curve: &'c Curve) -> Self {
        Self::Identity(curve)
    }

    /// Curve this point lies on.
    pub fn curve(&self) -> &'c Curve {
        match self {
            Self::Identity(curve) | Self::Affine { curve, .. } => *curve,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(_))
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Identity(_) => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Identity(_) => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    /// Does this point satisfy its curve's equation?
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Identity(_) => true,
            Self::Affine { curve, x, y } => curve.contains(x, y),
        }
    }

    /// Returns `self + self`.
    ///
    /// A point with `y = 0` has a vertical tangent and doubles to the identity.
    pub fn double(&self) -> Result<Self> {
        match self {
            Self::Identity(_) => Ok(self.clone()),
            Self::Affine { curve, x, y } => {
                if y.is_zero() {
                    return Ok(Self::Identity(*curve));
                }

                let slope = tangent_slope(curve, x, y)?;
                Ok(Self::third_point(*curve, &slope, x, y, x))
            }
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_curve(other)?;

        match (self, other) {
            (Self::Identity(_), _) => Ok(other.clone()),
            (_, Self::Identity(_)) => Ok(self.clone()),
            (
                Self::Affine {
                    curve,
                    x: x1,
                    y: y1,
                },
                Self::Affine { x: x2, y: y2, .. },
            ) => {
                let p = curve.p();

                let slope = if x1 == x2 {
                    // P = -Q
                    if (y1 + y2).mod_floor(p).is_zero() {
                        return Ok(Self::Identity(*curve));
                    }

                    tangent_slope(curve, x1, y1)?
                } else {
                    let inv = mod_inverse(&(x2 - x1), p)?;
                    ((y2 - y1) * inv).mod_floor(p)
                };

                Ok(Self::third_point(*curve, &slope, x1, y1, x2))
            }
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&-other)
    }

    /// Returns `[n] self` by double-and-add, scanning `n` from the least
    /// significant bit.
    ///
    /// Negative `n` multiplies the negated point.
    pub fn scalar_mul(&self, n: &BigInt) -> Result<Self> {
        if n.is_negative() {
            return Ok(-self.scalar_mul(&-n)?);
        }

        let mut acc = Self::Identity(self.curve());
        let mut addend = self.clone();
        let mut k = n.clone();

        while !k.is_zero() {
            if k.is_odd() {
                acc = acc.add(&addend)?;
            }

            k >>= 1u32;

            // no doubling once the last bit is consumed
            if !k.is_zero() {
                addend = addend.double()?;
            }
        }

        Ok(acc)
    }

    /// Third intersection of the line with slope `m` through `(x1, y1)`,
    /// reflected in the x-axis.
    fn third_point(curve: &'c Curve, m: &BigInt, x1: &BigInt, y1: &BigInt, x2: &BigInt) -> Self {
        let p = curve.p();
        let x3 = (m * m - x1 - x2).mod_floor(p);
        let y3 = (-(m * (&x3 - x1)) - y1).mod_floor(p);

        Self::Affine {
            curve,
            x: x3,
            y: y3,
        }
    }

    fn check_same_curve(&self, other: &Self) -> Result<()> {
        if same_curve(self.curve(), other.curve()) {
            Ok(())
        } else {
            Err(Error::CrossCurveOperation)
        }
    }
}

/// Slope of the tangent at `(x, y)`: `(3x² + a) / 2y`.
fn tangent_slope(curve: &Curve, x: &BigInt, y: &BigInt) -> Result<BigInt> {
    let p = curve.p();
    let inv = mod_inverse(&(2u32 * y), p)?;
    Ok(((3u32 * x * x + curve.a()) * inv).mod_floor(p))
}

fn same_curve(a: &Curve, b: &Curve) -> bool {
    core::ptr::eq(a, b) || a == b
}

impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        match self {
            Point::Identity(curve) => Point::Identity(*curve),
            Point::Affine { curve, x, y } => Point::Affine {
                curve: *curve,
                x: x.clone(),
                y: (curve.p() - y).mod_floor(curve.p()),
            },
        }
    }
}

impl<'c> Neg for Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        -&self
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_curve(self.curve(), other.curve())
            && match (self, other) {
                (Self::Identity(_), Self::Identity(_)) => true,
                (Self::Affine { x: x1, y: y1, .. }, Self::Affine { x: x2, y: y2, .. }) => {
                    x1 == x2 && y1 == y2
                }
                _ => false,
            }
    }
}

impl Eq for Point<'_> {}

impl Hash for Point<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.curve().hash(state);

        match self {
            Self::Identity(_) => 0u8.hash(state),
            Self::Affine { x, y, .. } => {
                1u8.hash(state);
                x.hash(state);
                y.hash(state);
            }
        }
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity(_) => f.write_str("O"),
            Self::Affine { x, y, .. } => write!(f, "({x},{y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use crate::{Curve, Error};
    use alloc::string::ToString;
    use num_bigint::BigInt;

    fn curve() -> Curve {
        Curve::new(2, 3, 97).unwrap()
    }

    #[test]
    fn new_reduces_coordinates() {
        let curve = curve();
        let point = Point::new(&curve, 100, -91, true).unwrap();
        assert_eq!(point.x(), Some(&BigInt::from(3)));
        assert_eq!(point.y(), Some(&BigInt::from(6)));
    }

    #[test]
    fn new_rejects_point_off_curve() {
        let curve = curve();
        assert_eq!(
            Point::new(&curve, 3, 7, true),
            Err(Error::PointNotOnCurve {
                x: BigInt::from(3),
                y: BigInt::from(7)
            })
        );

        let unchecked = Point::new(&curve, 3, 7, false).unwrap();
        assert!(!unchecked.is_on_curve());
    }

    #[test]
    fn double_fixture() {
        let curve = curve();
        let p = curve.point(3, 6).unwrap();
        assert_eq!(p.double().unwrap(), curve.point(80, 10).unwrap());
        assert_eq!(p.add(&p).unwrap(), curve.point(80, 10).unwrap());
    }

    #[test]
    fn point_of_order_five() {
        let curve = curve();
        let p = curve.point(3, 6).unwrap();
        assert!(p.scalar_mul(&BigInt::from(5)).unwrap().is_identity());
        assert_eq!(p.scalar_mul(&BigInt::from(6)).unwrap(), p);
        assert_eq!(p.scalar_mul(&BigInt::from(4)).unwrap(), -&p);
    }

    #[test]
    fn order_two_point_doubles_to_identity() {
        // x³ + x = x(x² + 1) vanishes at x = 0
        let curve = Curve::new(1, 0, 13).unwrap();
        let p = curve.point(0, 0).unwrap();
        assert!(p.double().unwrap().is_identity());
        assert!(p.add(&p).unwrap().is_identity());
        assert_eq!(-&p, p);
    }

    #[test]
    fn negation() {
        let curve = curve();
        let p = curve.point(3, 6).unwrap();
        assert_eq!(-&p, curve.point(3, 91).unwrap());
        assert_eq!(-curve.identity(), curve.identity());
    }

    #[test]
    fn cross_curve_operation() {
        let c1 = curve();
        let c2 = Curve::new(2, 3, 89).unwrap();
        let p = c1.point(3, 6).unwrap();
        let q = c2.identity();
        assert_eq!(p.add(&q), Err(Error::CrossCurveOperation));
        assert_eq!(q.add(&p), Err(Error::CrossCurveOperation));
        assert_eq!(p.sub(&q), Err(Error::CrossCurveOperation));
    }

    #[test]
    fn equal_curves_are_interchangeable() {
        let c1 = curve();
        let c2 = curve();
        let p = c1.point(3, 6).unwrap();
        let q = c2.point(3, 6).unwrap();
        assert_eq!(p, q);
        assert!(p.add(&q).is_ok());
    }

    #[test]
    fn identity_equals_only_identity() {
        let curve = curve();
        assert_eq!(curve.identity(), Point::identity(&curve));
        assert_ne!(curve.identity(), curve.point(3, 6).unwrap());
    }

    #[test]
    fn composite_modulus_surfaces_inverse_failure() {
        // 15 = 3·5, so the chord slope between x = 0 and x = 3 has no inverse
        let curve = Curve::new(2, 1, 15).unwrap();
        let p = curve.point(0, 1).unwrap();
        let q = curve.point(3, 2).unwrap();
        assert!(matches!(p.add(&q), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn display() {
        let curve = curve();
        assert_eq!(curve.identity().to_string(), "O");
        assert_eq!(curve.point(3, 6).unwrap().to_string(), "(3,6)");
    }
}
