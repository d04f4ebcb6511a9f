//! Support for verifying GOST R 34.10-2012 signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1: verify whether r, s in [1, q-1], verification failed if not
//! 2: calculate e = α mod q, where α is the digest value; if e = 0, set e = 1
//! 3: calculate v = e⁻¹ mod q
//! 4: calculate z₁ = s·v mod q, z₂ = -r·v mod q
//! 5: calculate the point C = [z₁]G + [z₂]Q and R = x_C mod q
//! 6: verification pass if R = r, otherwise failed
//! ```

use super::{prehash_to_digest_value, reduce_digest_value, Equation, Signature};
use crate::{
    arithmetic::field::{invert, neg_mod},
    to_be_bytes_padded, AffinePoint, BigUint, CurveParams, Error, Result,
};
use alloc::vec::Vec;
use num_traits::Zero;
use signature::{digest::Digest, hazmat::PrehashVerifier, DigestVerifier};

#[cfg(feature = "streebog")]
use {super::hash_message, signature::Verifier};

/// Check a signature over a digest value against the public point `Q`.
///
/// This is a total predicate: out-of-range signature components, a public
/// point that is the identity or not on the curve, and non-invertible
/// intermediate values all yield `false`.
pub fn verify_digest_value(
    params: &CurveParams,
    equation: Equation,
    public_point: &AffinePoint,
    digest_value: &BigUint,
    signature: &Signature,
) -> bool {
    let q = params.q();
    let (r, s) = signature.split_scalars();

    // 1: verify whether r, s in [1, q-1]
    if r.is_zero() || r >= q || s.is_zero() || s >= q {
        return false;
    }

    if public_point.is_identity() || !params.is_on_curve(public_point) {
        return false;
    }

    // 2: calculate e = α mod q; if e = 0, set e = 1
    let e = reduce_digest_value(digest_value, q);

    // 3-4: calculate z₁ and z₂
    let (z1, z2) = match equation {
        Equation::Gost => {
            let v = match invert(&e, q) {
                Ok(v) => v,
                Err(_) => return false,
            };
            ((s * &v) % q, (neg_mod(r, q) * v) % q)
        }
        Equation::Classical => {
            let w = match invert(s, q) {
                Ok(w) => w,
                Err(_) => return false,
            };
            ((&e * &w) % q, (r * w) % q)
        }
    };

    // 5: calculate C = [z₁]G + [z₂]Q and R = x_C mod q
    // 6: verification pass if R = r
    match params.lincomb((params.generator(), &z1), (public_point, &z2)) {
        Ok(AffinePoint::Affine { x, .. }) => x % q == *r,
        _ => false,
    }
}

/// GOST R 34.10-2012 public key used for verifying signatures are valid for a
/// given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message hashed with Streebog
/// - [`DigestVerifier`]: verify a message hashed with any [`Digest`]
/// - [`PrehashVerifier`]: verify the raw output bytes of a message digest
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Curve parameters.
    params: CurveParams,

    /// Signer's public point `Q = [d]G`.
    public_point: AffinePoint,

    /// Equation the signer uses.
    equation: Equation,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::PointNotOnCurve`] if the point is the identity or does
    /// not lie on the curve.
    pub fn from_affine(params: &CurveParams, public_point: AffinePoint) -> Result<Self> {
        if public_point.is_identity() || !params.is_on_curve(&public_point) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self {
            params: params.clone(),
            public_point,
            equation: Equation::default(),
        })
    }

    /// Parse a public key encoded as `x ‖ y`, each coordinate a big-endian
    /// integer as wide as a field element of `params`.
    pub fn from_slice(params: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 2 * params.field_size() {
            return Err(Error::Encoding);
        }

        let (x, y) = bytes.split_at(params.field_size());
        let point = params.point(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))?;
        Self::from_affine(params, point)
    }

    /// Serialize as `x ‖ y`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.params.field_size();
        let mut bytes = Vec::with_capacity(2 * size);

        if let Some((x, y)) = self.public_point.coordinates() {
            bytes.extend_from_slice(&to_be_bytes_padded(x, size));
            bytes.extend_from_slice(&to_be_bytes_padded(y, size));
        }

        bytes
    }

    /// Verify signatures made with `equation`.
    pub fn with_equation(mut self, equation: Equation) -> Self {
        self.equation = equation;
        self
    }

    /// Borrow the public point `Q`.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.public_point
    }

    /// Curve parameters of this key.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Signing equation this key verifies.
    pub fn equation(&self) -> Equation {
        self.equation
    }

    /// Check a signature over a digest value, see [`verify_digest_value`].
    pub fn verify_digest_value(&self, digest_value: &BigUint, signature: &Signature) -> bool {
        verify_digest_value(
            &self.params,
            self.equation,
            &self.public_point,
            digest_value,
            signature,
        )
    }

    fn check(&self, digest_value: &BigUint, signature: &Signature) -> signature::Result<()> {
        if self.verify_digest_value(digest_value, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        let digest_value = prehash_to_digest_value(&self.params, prehash)?;
        self.check(&digest_value, signature)
    }
}

impl<D: Digest> DigestVerifier<D, Signature> for VerifyingKey {
    fn verify_digest(&self, digest: D, signature: &Signature) -> signature::Result<()> {
        let digest_value = BigUint::from_bytes_be(&digest.finalize());
        self.check(&digest_value, signature)
    }
}

#[cfg(feature = "streebog")]
impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.check(&hash_message(&self.params, msg), signature)
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<VerifyingKey> for AffinePoint {
    fn from(verifying_key: VerifyingKey) -> AffinePoint {
        verifying_key.public_point
    }
}

impl From<&VerifyingKey> for AffinePoint {
    fn from(verifying_key: &VerifyingKey) -> AffinePoint {
        verifying_key.public_point.clone()
    }
}
