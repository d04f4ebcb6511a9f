//! Error type

use crate::params::ParamsError;
use core::fmt::{self, Display};

/// Result type with the `gost3410` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// GOST R 34.10-2012 errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Operand and modulus are not coprime, so no modular inverse exists.
    ///
    /// Signing treats this as a signal to draw a new nonce; verification
    /// turns it into a rejected signature.
    NoInverse,

    /// Key generation produced the point at infinity as the public key.
    DegeneratePublicKey,

    /// A bounded resampling loop ran out of attempts.
    ///
    /// With well-formed curve parameters and a working random source this
    /// does not happen.
    RetryLimitExceeded,

    /// The random source failed to produce output.
    RandomSource,

    /// A scalar is outside of `[1, q)`.
    ScalarOutOfRange,

    /// A point does not satisfy the curve equation, or is the identity where
    /// a finite point is required.
    PointNotOnCurve,

    /// Malformed or oversized byte encoding.
    Encoding,

    /// Curve parameters failed validation.
    InvalidParams(ParamsError),

    /// Unrecognized curve name or OID.
    UnknownCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse => f.write_str("modular inverse does not exist"),
            Error::DegeneratePublicKey => f.write_str("public key is the point at infinity"),
            Error::RetryLimitExceeded => f.write_str("retry limit exceeded"),
            Error::RandomSource => f.write_str("random source failure"),
            Error::ScalarOutOfRange => f.write_str("scalar out of range"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::Encoding => f.write_str("malformed encoding"),
            Error::InvalidParams(err) => write!(f, "invalid curve parameters: {err}"),
            Error::UnknownCurve => f.write_str("unknown curve"),
        }
    }
}

impl From<ParamsError> for Error {
    fn from(err: ParamsError) -> Error {
        Error::InvalidParams(err)
    }
}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Error {
        Error::RandomSource
    }
}

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
