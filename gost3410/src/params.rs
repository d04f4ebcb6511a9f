//! Curve parameter sets.
//!
//! A [`CurveParams`] value describes the short Weierstrass curve
//! `y² = x³ + ax + b` over the prime field of order `p`, together with a base
//! point `G` of prime order `q`. Every key and signature operation takes its
//! parameters explicitly, and parameters are validated when they are loaded.

use crate::{arithmetic::field::is_probable_prime, byte_len, AffinePoint, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use hex_literal::hex;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Domain parameters of a GOST R 34.10-2012 curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: AffinePoint,
    q: BigUint,
}

impl CurveParams {
    /// Load and validate a parameter set.
    ///
    /// Checks that `p` is a prime greater than 3, that `a` and `b` are reduced
    /// and the curve is non-singular, that `q` is prime, that the base point
    /// lies on the curve, and that `q·G` is the point at infinity. Together
    /// the last two make `q` the exact order of `G`.
    ///
    /// Primality is decided with a Miller-Rabin probable-prime test.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        q: BigUint,
    ) -> Result<Self> {
        if p <= BigUint::from(3u8) || p.is_even() || !is_probable_prime(&p) {
            return Err(ParamsError::Modulus.into());
        }

        if a >= p || b >= p {
            return Err(ParamsError::Coefficient.into());
        }

        // 4a³ + 27b² ≢ 0 (mod p)
        let discriminant =
            (BigUint::from(4u8) * &a * &a * &a + BigUint::from(27u8) * &b * &b) % &p;
        if discriminant.is_zero() {
            return Err(ParamsError::Singular.into());
        }

        if q <= BigUint::one() {
            return Err(ParamsError::Order.into());
        }

        if !is_probable_prime(&q) {
            return Err(ParamsError::OrderNotPrime.into());
        }

        let (gx, gy) = generator;
        let params = Self {
            p,
            a,
            b,
            generator: AffinePoint::from_coordinates(gx, gy),
            q,
        };

        if !params.is_on_curve(&params.generator) {
            return Err(ParamsError::Generator.into());
        }

        match params.mul_unreduced(&params.generator, &params.q) {
            Ok(AffinePoint::Identity) => Ok(params),
            _ => Err(ParamsError::Order.into()),
        }
    }

    /// Build a parameter set without any validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        (gx, gy): (BigUint, BigUint),
        q: BigUint,
    ) -> Self {
        Self {
            p,
            a,
            b,
            generator: AffinePoint::from_coordinates(gx, gy),
            q,
        }
    }

    /// Load and validate a parameter set from big-endian encoded integers.
    pub fn from_be_slices(
        p: &[u8],
        a: &[u8],
        b: &[u8],
        gx: &[u8],
        gy: &[u8],
        q: &[u8],
    ) -> Result<Self> {
        Self::new(
            BigUint::from_bytes_be(p),
            BigUint::from_bytes_be(a),
            BigUint::from_bytes_be(b),
            (BigUint::from_bytes_be(gx), BigUint::from_bytes_be(gy)),
            BigUint::from_bytes_be(q),
        )
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `q` of the base point.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Size of a serialized field element in bytes.
    pub fn field_size(&self) -> usize {
        byte_len(self.p.bits())
    }

    /// Size of a serialized scalar in bytes.
    pub fn scalar_size(&self) -> usize {
        byte_len(self.q.bits())
    }
}

/// Reasons a parameter set fails validation.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ParamsError {
    /// `p` is not a prime greater than 3.
    Modulus,

    /// `a` or `b` is not reduced modulo `p`.
    Coefficient,

    /// `4a³ + 27b² ≡ 0 (mod p)`.
    Singular,

    /// The base point is not on the curve.
    Generator,

    /// `q` is not greater than 1 or `q·G` is not the point at infinity.
    Order,

    /// `q` is composite.
    OrderNotPrime,
}

impl Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamsError::Modulus => "field modulus must be a prime greater than 3",
            ParamsError::Coefficient => "curve coefficients must be reduced modulo p",
            ParamsError::Singular => "curve is singular",
            ParamsError::Generator => "base point is not on the curve",
            ParamsError::Order => "base point order does not match q",
            ParamsError::OrderNotPrime => "group order q is not prime",
        })
    }
}

/// Standardized parameter sets.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum NamedCurve {
    /// `id-GostR3410-2001-TestParamSet`: the 256-bit example curve from
    /// GOST R 34.10-2012 Appendix A.1. For testing only.
    Gost256Test,

    /// `id-GostR3410-2001-CryptoPro-A-ParamSet`, also registered as
    /// `id-tc26-gost-3410-12-256-paramSetB` (RFC 4357 § 11.4, RFC 7836).
    Gost256A,

    /// `id-tc26-gost-3410-12-512-paramSetA` (RFC 7836 Appendix A.1).
    Gost512A,
}

/// Raw big-endian parameter values.
struct RawParams {
    p: &'static [u8],
    a: &'static [u8],
    b: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    q: &'static [u8],
}

const GOST_256_TEST: RawParams = RawParams {
    p: &hex!("8000000000000000000000000000000000000000000000000000000000000431"),
    a: &hex!("07"),
    b: &hex!("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E"),
    gx: &hex!("02"),
    gy: &hex!("08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8"),
    q: &hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
};

const GOST_256_A: RawParams = RawParams {
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
    a: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
    b: &hex!("A6"),
    gx: &hex!("01"),
    gy: &hex!("8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14"),
    q: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
};

const GOST_512_A: RawParams = RawParams {
    p: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"
    ),
    a: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4"
    ),
    b: &hex!(
        "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265"
        "EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760"
    ),
    gx: &hex!("03"),
    gy: &hex!(
        "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921"
        "DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4"
    ),
    q: &hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        "27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275"
    ),
};

impl NamedCurve {
    /// All supported parameter sets.
    pub const ALL: [NamedCurve; 3] = [
        NamedCurve::Gost256Test,
        NamedCurve::Gost256A,
        NamedCurve::Gost512A,
    ];

    /// Registered name of this parameter set.
    pub fn name(self) -> &'static str {
        match self {
            NamedCurve::Gost256Test => "id-GostR3410-2001-TestParamSet",
            NamedCurve::Gost256A => "id-GostR3410-2001-CryptoPro-A-ParamSet",
            NamedCurve::Gost512A => "id-tc26-gost-3410-12-512-paramSetA",
        }
    }

    /// Object identifier of this parameter set in dotted notation.
    pub fn oid(self) -> &'static str {
        match self {
            NamedCurve::Gost256Test => "1.2.643.2.2.35.0",
            NamedCurve::Gost256A => "1.2.643.2.2.35.1",
            NamedCurve::Gost512A => "1.2.643.7.1.2.1.2.1",
        }
    }

    /// Load and validate the parameters of this set.
    pub fn params(self) -> Result<CurveParams> {
        let raw = match self {
            NamedCurve::Gost256Test => &GOST_256_TEST,
            NamedCurve::Gost256A => &GOST_256_A,
            NamedCurve::Gost512A => &GOST_512_A,
        };

        CurveParams::from_be_slices(raw.p, raw.a, raw.b, raw.gx, raw.gy, raw.q)
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    /// Parse a registered name or dotted OID.
    fn from_str(s: &str) -> Result<Self> {
        // TC26 re-registered CryptoPro-A as 256-bit paramSetB
        if s == "id-tc26-gost-3410-12-256-paramSetB" || s == "1.2.643.7.1.2.1.1.2" {
            return Ok(NamedCurve::Gost256A);
        }

        Self::ALL
            .into_iter()
            .find(|curve| curve.name() == s || curve.oid() == s)
            .ok_or(Error::UnknownCurve)
    }
}

impl TryFrom<NamedCurve> for CurveParams {
    type Error = Error;

    fn try_from(curve: NamedCurve) -> Result<CurveParams> {
        curve.params()
    }
}
