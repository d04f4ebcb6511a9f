//! Parameter set tests.

use gost3410::{BigUint, CurveParams, Error, NamedCurve, ParamsError};
use hex_literal::hex;

fn big(n: u32) -> BigUint {
    BigUint::from(n)
}

fn toy_params(p: u32, a: u32, b: u32, g: (u32, u32), q: u32) -> gost3410::Result<CurveParams> {
    CurveParams::new(big(p), big(a), big(b), (big(g.0), big(g.1)), big(q))
}

#[test]
fn named_curves_load() {
    for curve in NamedCurve::ALL {
        let params = curve.params().unwrap();
        assert!(params.is_on_curve(params.generator()));
        assert_eq!(CurveParams::try_from(curve).unwrap(), params);
    }
}

#[test]
fn element_sizes() {
    let params = NamedCurve::Gost256Test.params().unwrap();
    assert_eq!(params.field_size(), 32);
    assert_eq!(params.scalar_size(), 32);

    let params = NamedCurve::Gost256A.params().unwrap();
    assert_eq!(params.field_size(), 32);
    assert_eq!(params.scalar_size(), 32);

    let params = NamedCurve::Gost512A.params().unwrap();
    assert_eq!(params.field_size(), 64);
    assert_eq!(params.scalar_size(), 64);
}

#[test]
fn cryptopro_a_values() {
    let params = NamedCurve::Gost256A.params().unwrap();
    assert_eq!(
        params.p(),
        &BigUint::from_bytes_be(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"
        ))
    );
    assert_eq!(params.a(), &(params.p() - 3u32));
    assert_eq!(params.b(), &big(0xA6));
    assert_eq!(params.generator().x(), Some(&big(1)));
}

#[test]
fn names_and_oids_parse() {
    for curve in NamedCurve::ALL {
        assert_eq!(curve.name().parse::<NamedCurve>(), Ok(curve));
        assert_eq!(curve.oid().parse::<NamedCurve>(), Ok(curve));
        assert_eq!(curve.to_string().parse::<NamedCurve>(), Ok(curve));
    }

    assert_eq!(
        "id-tc26-gost-3410-12-256-paramSetB".parse::<NamedCurve>(),
        Ok(NamedCurve::Gost256A)
    );
    assert_eq!(
        "1.2.643.7.1.2.1.1.2".parse::<NamedCurve>(),
        Ok(NamedCurve::Gost256A)
    );
}

#[test]
fn unknown_names_rejected() {
    assert_eq!("".parse::<NamedCurve>(), Err(Error::UnknownCurve));
    assert_eq!("P-256".parse::<NamedCurve>(), Err(Error::UnknownCurve));
    assert_eq!("1.2.643.2.2.35.9".parse::<NamedCurve>(), Err(Error::UnknownCurve));
}

#[test]
fn display() {
    assert_eq!(
        NamedCurve::Gost512A.to_string(),
        "id-tc26-gost-3410-12-512-paramSetA"
    );
    assert_eq!(
        Error::InvalidParams(ParamsError::Singular).to_string(),
        "invalid curve parameters: curve is singular"
    );
}

#[test]
fn rejects_bad_modulus() {
    assert_eq!(
        toy_params(96, 5, 4, (44, 40), 47),
        Err(Error::InvalidParams(ParamsError::Modulus))
    );
    assert_eq!(
        toy_params(3, 1, 1, (0, 1), 2),
        Err(Error::InvalidParams(ParamsError::Modulus))
    );
}

#[test]
fn rejects_composite_modulus() {
    // 91 = 7·13
    assert_eq!(
        toy_params(91, 5, 4, (1, 1), 47),
        Err(Error::InvalidParams(ParamsError::Modulus))
    );
}

#[test]
fn rejects_unreduced_coefficients() {
    assert_eq!(
        toy_params(97, 97 + 5, 4, (44, 40), 47),
        Err(Error::InvalidParams(ParamsError::Coefficient))
    );
    assert_eq!(
        toy_params(97, 5, 97, (44, 40), 47),
        Err(Error::InvalidParams(ParamsError::Coefficient))
    );
}

#[test]
fn rejects_singular_curve() {
    assert_eq!(
        toy_params(97, 0, 0, (1, 1), 47),
        Err(Error::InvalidParams(ParamsError::Singular))
    );
}

#[test]
fn rejects_generator_off_curve() {
    assert_eq!(
        toy_params(97, 5, 4, (44, 41), 47),
        Err(Error::InvalidParams(ParamsError::Generator))
    );
}

#[test]
fn rejects_wrong_order() {
    assert_eq!(
        toy_params(97, 5, 4, (44, 40), 1),
        Err(Error::InvalidParams(ParamsError::Order))
    );
    assert_eq!(
        toy_params(97, 5, 4, (44, 40), 53),
        Err(Error::InvalidParams(ParamsError::Order))
    );
}

#[test]
fn rejects_composite_order() {
    // 94·G = O, but the base point has order 47
    assert_eq!(
        toy_params(97, 5, 4, (44, 40), 94),
        Err(Error::InvalidParams(ParamsError::OrderNotPrime))
    );
    assert_eq!(
        toy_params(97, 5, 4, (44, 40), 47 * 3),
        Err(Error::InvalidParams(ParamsError::OrderNotPrime))
    );
    assert_eq!(
        Error::InvalidParams(ParamsError::OrderNotPrime).to_string(),
        "invalid curve parameters: group order q is not prime"
    );
}

#[test]
fn accepts_p256() {
    let params = CurveParams::from_be_slices(
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        &hex!("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"),
        &hex!("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        &hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        &hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        &hex!("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
    )
    .unwrap();
    assert_eq!(params.field_size(), 32);
}

#[test]
fn accepts_toy_curve() {
    let params = toy_params(97, 5, 4, (44, 40), 47).unwrap();
    assert_eq!(params.field_size(), 1);
    assert_eq!(params.scalar_size(), 1);
}

/// Inconsistent parameter sets found in some published test material.
#[test]
fn rejects_inconsistent_published_sets() {
    let p = hex!("8000000000000000000000000000000000000000000000000000000000000431");
    let b = hex!("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E");

    // Field modulus reused as the group order, unrelated base point
    let modulus: BigUint =
        "57896044618658097711785492504343953926634992332820282019728792003956564823193"
            .parse()
            .unwrap();
    let result = CurveParams::new(
        modulus.clone(),
        big(7),
        "43308876546767276905765904595650931995942111794451039587316730224963703718511"
            .parse()
            .unwrap(),
        (
            big(2),
            "4018974056539037503335449422937059775635739389905545080690979365213431566280"
                .parse()
                .unwrap(),
        ),
        modulus,
    );
    assert_eq!(result, Err(Error::InvalidParams(ParamsError::Generator)));

    // Truncated base point y-coordinate
    let result = CurveParams::from_be_slices(
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
        &hex!("A6"),
        &hex!("01"),
        &hex!("08D91E471E0980C1F5D1F4D8C5B6A8B6F7E7E3D9E0B6E6B6E7E3D9E0B6E6B6E7"),
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
    );
    assert_eq!(result, Err(Error::InvalidParams(ParamsError::Generator)));

    // Base point (2, p - 1) over a composite modulus
    let modulus: BigUint =
        "57896044618658097711785492504343953926418782139537452191302581570759080747169"
            .parse()
            .unwrap();
    let result = CurveParams::new(
        modulus.clone(),
        big(7),
        "43308876546767276905765900574683423135711535271985780914745867236231519206471"
            .parse()
            .unwrap(),
        (big(2), &modulus - 1u32),
        modulus.clone(),
    );
    assert_eq!(result, Err(Error::InvalidParams(ParamsError::Modulus)));

    // Test curve with its base point y-coordinate swapped for b
    let result = CurveParams::from_be_slices(
        &p,
        &hex!("07"),
        &b,
        &hex!("02"),
        &b,
        &hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
    );
    assert_eq!(result, Err(Error::InvalidParams(ParamsError::Generator)));
}
