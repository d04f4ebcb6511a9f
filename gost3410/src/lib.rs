#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod dsa;

mod arithmetic;
mod error;
mod params;

pub use crate::{
    arithmetic::{field::invert, AffinePoint},
    error::{Error, Result},
    params::{CurveParams, NamedCurve, ParamsError},
};
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "streebog")]
pub use streebog;

use alloc::vec::Vec;
use core::cmp;

/// Serialize `value` as a big-endian byte string, left-padded with zeros to
/// `len` bytes.
///
/// Callers check that the value fits; a larger value is returned unpadded.
pub(crate) fn to_be_bytes_padded(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();

    // `to_bytes_be` encodes zero as a single zero byte
    let bytes = if value.bits() == 0 { &[][..] } else { &bytes[..] };

    let mut ret = Vec::with_capacity(cmp::max(len, bytes.len()));
    ret.resize(len.saturating_sub(bytes.len()), 0);
    ret.extend_from_slice(bytes);
    ret
}

/// Number of bytes needed to hold a value of `bits` bits.
pub(crate) fn byte_len(bits: u64) -> usize {
    usize::try_from((bits + 7) / 8).unwrap_or(usize::MAX)
}
