//! GOST R 34.10-2012 digital signature algorithm.
//!
//! ## Usage
//!
//! NOTE: the message-level API requires the `streebog` crate feature, and
//! signing without an explicit RNG requires the `getrandom` feature.
//!
#![cfg_attr(all(feature = "getrandom", feature = "streebog"), doc = "```")]
#![cfg_attr(not(all(feature = "getrandom", feature = "streebog")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gost3410::{
//!     dsa::{Signature, SigningKey, signature::Signer},
//!     rand_core::OsRng,
//!     NamedCurve,
//! };
//!
//! // Signing
//! let params = NamedCurve::Gost256A.params()?;
//! let signing_key = SigningKey::random(&params, &mut OsRng)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_bytes();
//! let message = b"test message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verifying
//! use gost3410::dsa::{VerifyingKey, signature::Verifier};
//!
//! let verifying_key = VerifyingKey::from_slice(&params, &verifying_key_bytes)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing equations
//!
//! Two mutually incompatible equations are supported, selected per key with
//! [`Equation`]. [`Equation::Gost`] is the one defined by the standard and
//! is the default.

mod signing;
mod verifying;

pub use signature;

pub use self::{
    signing::{sign_digest_value, SigningKey},
    verifying::{verify_digest_value, VerifyingKey},
};

use crate::{to_be_bytes_padded, BigUint, CurveParams, Error, Result};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use num_traits::{One, Zero};

/// Equation relating the signature components to the key, nonce and digest.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Equation {
    /// GOST R 34.10-2012: `s = (r·d + k·e) mod q`.
    ///
    /// Verified with `v = e⁻¹`, `R' = (s·v)·G + (-r·v)·Q`.
    #[default]
    Gost,

    /// ECDSA form: `s = k⁻¹·(e + d·r) mod q`.
    ///
    /// Verified with `w = s⁻¹`, `R' = (e·w)·G + (r·w)·Q`.
    Classical,
}

/// GOST R 34.10-2012 signature: the pair `(r, s)`.
///
/// Any pair of integers can be represented. Range checks against the group
/// order happen at verification time, where out-of-range components make
/// verification fail.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a [`Signature`] from its `r` and `s` components.
    pub fn from_scalars(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse a signature encoded as `r ‖ s`, two big-endian integers of equal
    /// width.
    pub fn from_slice(bytes: &[u8]) -> signature::Result<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(signature::Error::new());
        }

        let (r_bytes, s_bytes) = bytes.split_at(bytes.len() / 2);
        Ok(Self {
            r: BigUint::from_bytes_be(r_bytes),
            s: BigUint::from_bytes_be(s_bytes),
        })
    }

    /// Serialize as `r ‖ s`, each component padded to the scalar size of
    /// `params`.
    ///
    /// Returns [`Error::ScalarOutOfRange`] if a component is not in `[1, q)`.
    pub fn to_bytes(&self, params: &CurveParams) -> Result<Vec<u8>> {
        let q = params.q();
        if self.r.is_zero() || &self.r >= q || self.s.is_zero() || &self.s >= q {
            return Err(Error::ScalarOutOfRange);
        }

        let mut bytes = to_be_bytes_padded(&self.r, params.scalar_size());
        bytes.extend_from_slice(&to_be_bytes_padded(&self.s, params.scalar_size()));
        Ok(bytes)
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(&self) -> (&BigUint, &BigUint) {
        (&self.r, &self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost3410::dsa::Signature(r={:X}, s={:X})", self.r, self.s)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Signature> {
        Signature::from_slice(bytes)
    }
}

/// Reduce a digest value modulo `q`, replacing zero with one.
pub(crate) fn reduce_digest_value(digest_value: &BigUint, q: &BigUint) -> BigUint {
    let e = digest_value % q;

    if e.is_zero() {
        BigUint::one()
    } else {
        e
    }
}

/// Interpret a prehashed message as a digest value, checking that its length
/// matches the field size of the curve.
pub(crate) fn prehash_to_digest_value(
    params: &CurveParams,
    prehash: &[u8],
) -> signature::Result<BigUint> {
    if prehash.len() != params.field_size() {
        return Err(signature::Error::new());
    }

    Ok(BigUint::from_bytes_be(prehash))
}

/// Hash a message with Streebog, using the 512-bit variant for curves over
/// fields wider than 256 bits and the 256-bit variant otherwise.
#[cfg(feature = "streebog")]
pub(crate) fn hash_message(params: &CurveParams, msg: &[u8]) -> BigUint {
    use streebog::{Digest, Streebog256, Streebog512};

    if params.p().bits() > 256 {
        BigUint::from_bytes_be(&Streebog512::digest(msg))
    } else {
        BigUint::from_bytes_be(&Streebog256::digest(msg))
    }
}
