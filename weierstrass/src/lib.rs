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

pub mod dev;
pub mod named;

mod curve;
mod error;
mod point;
mod points;

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    point::Point,
    points::Points,
};
pub use modarith::{self, BigInt};
