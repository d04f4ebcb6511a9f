//! Support for GOST R 34.10-2012 signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1: calculate e = α mod q, where α is the digest value; if e = 0, set e = 1
//! 2: pick a random number k in [1, q-1]
//! 3: calculate the elliptic curve point C = [k]G and r = x_C mod q;
//!    return to 2 if r = 0
//! 4: calculate s = (r·d + k·e) mod q; return to 2 if s = 0
//! 5: the digital signature is (r, s)
//! ```

use super::{prehash_to_digest_value, reduce_digest_value, Equation, Signature, VerifyingKey};
use crate::{
    arithmetic::field::{invert, random_nonzero_scalar},
    to_be_bytes_padded, AffinePoint, BigUint, CurveParams, Error, Result,
};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use num_traits::Zero;
use signature::{
    digest::Digest,
    hazmat::RandomizedPrehashSigner,
    rand_core::CryptoRngCore,
    KeypairRef, RandomizedDigestSigner,
};
use zeroize::Zeroizing;

#[cfg(feature = "getrandom")]
use {
    rand_core::OsRng,
    signature::{hazmat::PrehashSigner, DigestSigner},
};

#[cfg(feature = "streebog")]
use {super::hash_message, signature::RandomizedSigner};

#[cfg(all(feature = "getrandom", feature = "streebog"))]
use signature::Signer;

/// Upper bound on nonces drawn for a single signature.
///
/// Each attempt fails with negligible probability for sound parameters, so
/// running out means the parameters are corrupt.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// Sign a digest value with the secret scalar `d`.
///
/// This is the raw signature primitive: `digest_value` is the hash of the
/// message interpreted as an integer. It is reduced modulo `q` and a zero
/// result is replaced with one.
///
/// A fresh nonce is drawn from `rng` for every attempt. Attempts that yield
/// `r = 0`, `s = 0` or a non-invertible nonce are retried. After 64 failed
/// attempts the call gives up with [`Error::RetryLimitExceeded`].
pub fn sign_digest_value(
    params: &CurveParams,
    equation: Equation,
    secret_scalar: &BigUint,
    digest_value: &BigUint,
    rng: &mut impl CryptoRngCore,
) -> Result<Signature> {
    let q = params.q();
    if secret_scalar.is_zero() || secret_scalar >= q {
        return Err(Error::ScalarOutOfRange);
    }

    // 1: calculate e = α mod q; if e = 0, set e = 1
    let e = reduce_digest_value(digest_value, q);

    for _ in 0..MAX_SIGN_ATTEMPTS {
        // 2: pick a random number k in [1, q-1]
        let k = random_nonzero_scalar(rng, q)?;

        // 3: calculate C = [k]G and r = x_C mod q; retry if r = 0
        let r = match params.mul_by_generator(&k) {
            Ok(AffinePoint::Affine { x, .. }) => x % q,
            Ok(AffinePoint::Identity) | Err(Error::NoInverse) => continue,
            Err(err) => return Err(err),
        };

        if r.is_zero() {
            continue;
        }

        // 4: calculate s; retry if s = 0
        let s = match equation {
            Equation::Gost => (&r * secret_scalar + &k * &e) % q,
            Equation::Classical => match invert(&k, q) {
                Ok(k_inv) => (k_inv * (&e + secret_scalar * &r)) % q,
                Err(Error::NoInverse) => continue,
                Err(err) => return Err(err),
            },
        };

        if s.is_zero() {
            continue;
        }

        // 5: the digital signature is (r, s)
        return Ok(Signature::from_scalars(r, s));
    }

    Err(Error::RetryLimitExceeded)
}

/// GOST R 34.10-2012 secret key used for signing messages and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message hashed with Streebog
/// - [`RandomizedDigestSigner`]: sign a message hashed with any [`Digest`]
/// - [`RandomizedPrehashSigner`]: sign the raw output bytes of a message digest
///
/// With the `getrandom` feature the `Signer`, `DigestSigner` and
/// `PrehashSigner` counterparts draw nonces from the operating system RNG.
///
/// The secret scalar and per-signature nonces are held in heap-allocated
/// `BigUint`s, which are not wiped when dropped. Only [`SigningKey::to_bytes`]
/// and the sampling buffer are zeroized.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar `d`.
    secret_scalar: BigUint,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a key pair: draw `d` uniformly from `[1, q-1]` and compute
    /// `Q = [d]G`.
    ///
    /// Returns [`Error::DegeneratePublicKey`] if `Q` is the point at infinity.
    pub fn random(params: &CurveParams, rng: &mut impl CryptoRngCore) -> Result<Self> {
        let secret_scalar = random_nonzero_scalar(rng, params.q())?;
        Self::from_scalar(params, secret_scalar)
    }

    /// Create a signing key from a secret scalar in `[1, q)`.
    pub fn from_scalar(params: &CurveParams, secret_scalar: BigUint) -> Result<Self> {
        if secret_scalar.is_zero() || &secret_scalar >= params.q() {
            return Err(Error::ScalarOutOfRange);
        }

        let public_point = params.mul_by_generator(&secret_scalar)?;
        if public_point.is_identity() {
            return Err(Error::DegeneratePublicKey);
        }

        let verifying_key = VerifyingKey::from_affine(params, public_point)?;
        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Parse a signing key from a big-endian byte slice exactly as wide as a
    /// scalar of `params`.
    pub fn from_slice(params: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != params.scalar_size() {
            return Err(Error::Encoding);
        }

        Self::from_scalar(params, BigUint::from_bytes_be(bytes))
    }

    /// Use `equation` for signatures made with this key.
    pub fn with_equation(mut self, equation: Equation) -> Self {
        self.verifying_key = self.verifying_key.with_equation(equation);
        self
    }

    /// Serialize the secret scalar as big-endian bytes.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(to_be_bytes_padded(
            &self.secret_scalar,
            self.params().scalar_size(),
        ))
    }

    /// Borrow the secret scalar `d`.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Curve parameters of this key.
    pub fn params(&self) -> &CurveParams {
        self.verifying_key.params()
    }

    /// Signing equation used by this key.
    pub fn equation(&self) -> Equation {
        self.verifying_key.equation()
    }

    /// Sign a digest value, see [`sign_digest_value`].
    pub fn sign_digest_value(
        &self,
        rng: &mut impl CryptoRngCore,
        digest_value: &BigUint,
    ) -> Result<Signature> {
        sign_digest_value(
            self.params(),
            self.equation(),
            &self.secret_scalar,
            digest_value,
            rng,
        )
    }
}

//
// `*Signer` trait impls
//

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        let digest_value = prehash_to_digest_value(self.params(), prehash)?;
        Ok(self.sign_digest_value(rng, &digest_value)?)
    }
}

impl<D: Digest> RandomizedDigestSigner<D, Signature> for SigningKey {
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: D,
    ) -> signature::Result<Signature> {
        let digest_value = BigUint::from_bytes_be(&digest.finalize());
        Ok(self.sign_digest_value(rng, &digest_value)?)
    }
}

#[cfg(feature = "streebog")]
impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        let digest_value = hash_message(self.params(), msg);
        Ok(self.sign_digest_value(rng, &digest_value)?)
    }
}

#[cfg(feature = "getrandom")]
impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, prehash)
    }
}

#[cfg(feature = "getrandom")]
impl<D: Digest> DigestSigner<D, Signature> for SigningKey {
    fn try_sign_digest(&self, digest: D) -> signature::Result<Signature> {
        self.try_sign_digest_with_rng(&mut OsRng, digest)
    }
}

#[cfg(all(feature = "getrandom", feature = "streebog"))]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Eq for SigningKey {}

/// Compares the secret scalars in variable time.
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.secret_scalar == other.secret_scalar && self.verifying_key == other.verifying_key
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}

#[cfg(test)]
mod tests {
    use super::SigningKey;
    use crate::{BigUint, CurveParams, Error};

    #[test]
    fn identity_public_key_rejected() {
        // The base point has order 47, so the composite order 94 slips an
        // annihilating scalar into [1, q)
        let params = CurveParams::new_unchecked(
            BigUint::from(97u32),
            BigUint::from(5u32),
            BigUint::from(4u32),
            (BigUint::from(44u32), BigUint::from(40u32)),
            BigUint::from(94u32),
        );

        assert_eq!(
            SigningKey::from_scalar(&params, BigUint::from(47u32)),
            Err(Error::DegeneratePublicKey)
        );
        assert!(SigningKey::from_scalar(&params, BigUint::from(46u32)).is_ok());
    }
}
