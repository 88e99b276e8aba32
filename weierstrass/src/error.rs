//! Error types.

use num_bigint::BigInt;

/// Elliptic curve errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The discriminant `4a³ + 27b²` vanishes modulo `p`.
    #[error("singular curve: discriminant is zero modulo p")]
    SingularCurve,

    /// The field modulus is even or smaller than 3.
    #[error("field modulus must be an odd prime, got {0}")]
    InvalidModulus(BigInt),

    /// The coordinates do not satisfy the curve equation.
    #[error("point ({x},{y}) is not on the curve")]
    PointNotOnCurve {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },

    /// The operands of a group operation belong to different curves.
    #[error("points belong to different curves")]
    CrossCurveOperation,

    /// Modular arithmetic failure, e.g. an inverse that does not exist because
    /// the modulus is not prime.
    #[error(transparent)]
    Arithmetic(#[from] modarith::Error),
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
