//! Scalar multiplication.

use super::AffinePoint;
use crate::{CurveParams, Result};
use core::cmp;
use num_bigint::BigUint;

impl CurveParams {
    /// Compute `k·point` with left-to-right binary double-and-add.
    ///
    /// The scalar is reduced modulo the group order `q` first, so the result
    /// is only meaningful for points in the subgroup generated by the base
    /// point. Returns the identity when `k ≡ 0 (mod q)` or `point` is the
    /// identity.
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        self.mul_unreduced(point, &(k % self.q()))
    }

    /// Compute `k·point` for the full, unreduced scalar.
    ///
    /// Used to check `q·G = O` while validating parameters.
    pub(crate) fn mul_unreduced(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        if point.is_identity() {
            return Ok(AffinePoint::Identity);
        }

        let mut acc = AffinePoint::Identity;

        for i in (0..k.bits()).rev() {
            acc = self.double(&acc)?;

            if k.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }

        Ok(acc)
    }

    /// Compute `k·G` where `G` is the base point of the curve.
    pub fn mul_by_generator(&self, k: &BigUint) -> Result<AffinePoint> {
        self.mul(self.generator(), k)
    }

    /// Compute `k1·p1 + k2·p2` with a single shared doubling chain
    /// (Shamir's trick).
    pub fn lincomb(
        &self,
        (p1, k1): (&AffinePoint, &BigUint),
        (p2, k2): (&AffinePoint, &BigUint),
    ) -> Result<AffinePoint> {
        let q = self.q();
        let k1 = k1 % q;
        let k2 = k2 % q;
        let sum = self.add(p1, p2)?;

        let mut acc = AffinePoint::Identity;

        for i in (0..cmp::max(k1.bits(), k2.bits())).rev() {
            acc = self.double(&acc)?;

            let addend = match (k1.bit(i), k2.bit(i)) {
                (true, true) => &sum,
                (true, false) => p1,
                (false, true) => p2,
                (false, false) => continue,
            };

            acc = self.add(&acc, addend)?;
        }

        Ok(acc)
    }
}
