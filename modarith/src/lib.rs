#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod euclid;
mod jacobi;
mod pow;
mod sqrt;

pub use crate::{
    error::{Error, Result},
    euclid::{Bezout, extended_gcd, gcd, mod_inverse},
    jacobi::{JacobiSymbol, jacobi_symbol},
    pow::{mod_pow, odd_part},
    sqrt::{Algorithm, sqrt_mod_p},
};
pub use num_bigint::{self, BigInt};
pub use rand_core;
