//! Affine points and the group law.

use super::field::{invert, neg_mod, sub_mod};
use crate::{CurveParams, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Elliptic curve point expressed in affine coordinates.
///
/// Either the point at infinity (the group identity) or a pair `(x, y)` of
/// field elements. Points are plain values and carry no reference to the
/// curve they belong to; use [`CurveParams::point`] to build a point that is
/// known to be on a given curve.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group: the point at infinity.
    #[default]
    Identity,

    /// Finite point.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Create a finite point from its coordinates without any checks.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Self {
        AffinePoint::Affine { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// Borrow the `(x, y)` coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { x, y } => Some((x, y)),
        }
    }

    /// Get the x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Get the y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl CurveParams {
    /// Create a point from its affine coordinates, checking that both are
    /// reduced field elements and that the point lies on this curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<AffinePoint> {
        let point = AffinePoint::from_coordinates(x, y);

        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Does `point` satisfy `y² = x³ + ax + b (mod p)` with both coordinates
    /// in `[0, p)`?
    ///
    /// The identity is considered to be on every curve.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let (x, y) = match point.coordinates() {
            Some(coords) => coords,
            None => return true,
        };

        let p = self.p();
        if x >= p || y >= p {
            return false;
        }

        let lhs = (y * y) % p;
        let rhs = (x * x * x + self.a() * x + self.b()) % p;
        lhs == rhs
    }

    /// Negate a point: `(x, y) ↦ (x, -y)`.
    pub fn neg(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => AffinePoint::Affine {
                x: x.clone(),
                y: neg_mod(y, self.p()),
            },
        }
    }

    /// Add two points using the affine chord-and-tangent rule.
    ///
    /// Returns [`Error::NoInverse`] only when the inputs are not on the curve
    /// (e.g. equal x-coordinates with unrelated y-coordinates).
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let (x1, y1) = match lhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(rhs.clone()),
        };
        let (x2, y2) = match rhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(lhs.clone()),
        };

        let p = self.p();

        // P + (-P) = O
        if x1 == x2 && ((y1 + y2) % p).is_zero() {
            return Ok(AffinePoint::Identity);
        }

        let lambda = if x1 == x2 && y1 == y2 {
            // 2-torsion points double to O
            if y1.is_zero() {
                return Ok(AffinePoint::Identity);
            }

            // λ = (3x₁² + a) / 2y₁
            let numerator = (BigUint::from(3u8) * x1 * x1 + self.a()) % p;
            let denominator = (y1 << 1u8) % p;
            (numerator * invert(&denominator, p)?) % p
        } else {
            // λ = (y₂ - y₁) / (x₂ - x₁)
            let numerator = sub_mod(y2, y1, p);
            let denominator = sub_mod(x2, x1, p);
            (numerator * invert(&denominator, p)?) % p
        };

        // x₃ = λ² - x₁ - x₂
        let x3 = sub_mod(&sub_mod(&(&lambda * &lambda), x1, p), x2, p);

        // y₃ = λ(x₁ - x₃) - y₁
        let y3 = sub_mod(&(lambda * sub_mod(x1, &x3, p)), y1, p);

        Ok(AffinePoint::Affine { x: x3, y: y3 })
    }

    /// Double a point.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.add(point, point)
    }
}
