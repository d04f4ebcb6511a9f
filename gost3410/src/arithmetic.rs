//! Pure Rust implementation of group operations on short Weierstrass curves
//! over prime fields, with curve parameters supplied at runtime.
//!
//! All operations are methods on [`CurveParams`](crate::CurveParams) so the
//! curve in use is always explicit. Points are kept in affine coordinates
//! and every addition costs one modular inversion.
//!
//! These routines are variable-time.

pub(crate) mod field;
pub(crate) mod mul;
pub(crate) mod point;

pub use self::point::AffinePoint;
