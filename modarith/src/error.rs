//! Error types.

use num_bigint::BigInt;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// `a` and `m` share a non-trivial common factor, so `a` has no inverse modulo `m`.
    #[error("{a} is not invertible modulo {m}")]
    NotInvertible {
        /// Element whose inverse was requested.
        a: BigInt,
        /// Modulus.
        m: BigInt,
    },

    /// The modulus is not a positive integer.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(BigInt),
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
