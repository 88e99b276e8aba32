//! Short Weierstrass curves `y² = x³ + ax + b` over prime fields.

use crate::{Error, Point, Points, Result};
use alloc::{vec, vec::Vec};
use core::fmt;
use modarith::{jacobi_symbol, sqrt_mod_p};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand_core::RngCore;

/// Elliptic curve `y² = x³ + ax + b` over the field of integers modulo a prime `p`.
///
/// Curves are immutable once constructed. Points borrow the curve they live
/// on, so a single curve can be shared by any number of points.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Curve {
    /// Coefficient `a`, reduced modulo `p`.
    a: BigInt,

    /// Coefficient `b`, reduced modulo `p`.
    b: BigInt,

    /// Field modulus.
    p: BigInt,
}

impl Curve {
    /// Create the curve `y² = x³ + ax + b` over `ℤ/pℤ`.
    ///
    /// `p` is assumed to be prime; this is not verified. Returns
    /// [`Error::InvalidModulus`] if `p` is even or less than 3, and
    /// [`Error::SingularCurve`] if `4a³ + 27b² ≡ 0 (mod p)`.
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>, p: impl Into<BigInt>) -> Result<Self> {
        let (a, b, p) = (a.into(), b.into(), p.into());

        if p < BigInt::from(3u32) || p.is_even() {
            return Err(Error::InvalidModulus(p));
        }

        let curve = Self::from_parts(a.mod_floor(&p), b.mod_floor(&p), p);

        if curve.discriminant().is_zero() {
            return Err(Error::SingularCurve);
        }

        tracing::debug!(a = %curve.a, b = %curve.b, p = %curve.p, "constructed curve");
        Ok(curve)
    }

    /// Assemble a curve from parameters which are already reduced and known
    /// to be non-singular.
    pub(crate) fn from_parts(a: BigInt, b: BigInt, p: BigInt) -> Self {
        debug_assert!(!a.is_negative() && a < p);
        debug_assert!(!b.is_negative() && b < p);
        Self { a, b, p }
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// `4a³ + 27b² mod p`, which is non-zero for every constructed curve.
    pub fn discriminant(&self) -> BigInt {
        (4u32 * self.a.pow(3) + 27u32 * self.b.pow(2)).mod_floor(&self.p)
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(&self) -> Point<'_> {
        Point::Identity(self)
    }

    /// Create the point `(x, y)`, checking that it satisfies the curve equation.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Result<Point<'_>> {
        Point::new(self, x, y, true)
    }

    /// Does `(x, y)` satisfy `y² ≡ x³ + ax + b (mod p)`?
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        (y * y - self.rhs(x)).mod_floor(&self.p).is_zero()
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod p`.
    pub(crate) fn rhs(&self, x: &BigInt) -> BigInt {
        (x.pow(3) + &self.a * x + &self.b).mod_floor(&self.p)
    }

    /// All points with x-coordinate `x`.
    ///
    /// Returns `(x, 0)` alone when the right-hand side vanishes, the pair
    /// `(x, y)`, `(x, p - y)` when it is a non-zero square, and nothing
    /// otherwise. `rng` drives the square root for `p ≡ 1 (mod 8)`.
    pub fn lift_x<R>(&self, x: impl Into<BigInt>, rng: &mut R) -> Vec<Point<'_>>
    where
        R: RngCore + ?Sized,
    {
        let x = x.into().mod_floor(&self.p);
        let z = self.rhs(&x);

        if z.is_zero() {
            return vec![Point::affine(self, x, BigInt::zero())];
        }

        if !jacobi_symbol(&z, &self.p).is_one() {
            return Vec::new();
        }

        let y = sqrt_mod_p(&z, &self.p, rng);
        let neg_y = &self.p - &y;

        vec![
            Point::affine(self, x.clone(), y),
            Point::affine(self, x, neg_y),
        ]
    }

    /// Lazily enumerate every point on the curve: the identity first, then the
    /// affine points in order of increasing x-coordinate.
    ///
    /// The sequence is finite and its length is [`Curve::order`].
    pub fn points_with_rng<R: RngCore>(&self, rng: R) -> Points<'_, R> {
        Points::new(self, rng)
    }

    /// Same as [`Curve::points_with_rng`], drawing randomness from the
    /// operating system.
    #[cfg(feature = "getrandom")]
    pub fn points(&self) -> Points<'_, rand_core::OsRng> {
        self.points_with_rng(rand_core::OsRng)
    }

    /// Number of points on the curve, including the identity.
    ///
    /// Uses `#E = p + 1 + Σ (x³ + ax + b / p)` over `x ∈ [0, p)`, which costs
    /// `p` Jacobi symbols instead of `p` square roots.
    pub fn order(&self) -> BigInt {
        let mut sum = BigInt::zero();
        let mut x = BigInt::zero();

        while x < self.p {
            sum += i8::from(jacobi_symbol(&self.rhs(&x), &self.p));
            x += 1u32;
        }

        let order = &self.p + 1u32 + sum;
        tracing::debug!(%order, "computed group order");
        order
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} over F_{}",
            self.a, self.b, self.p
        )
    }
}
