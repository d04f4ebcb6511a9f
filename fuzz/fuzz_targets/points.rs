#![no_main]
use gost3410::{AffinePoint, BigUint, CurveParams, NamedCurve};
use libfuzzer_sys::fuzz_target;

fn test_group(params: &CurveParams, p1: &AffinePoint, p2: &AffinePoint, k: &BigUint) {
    let sum = params.add(p1, p2).unwrap();
    assert!(params.is_on_curve(&sum));

    // Commutativity
    assert_eq!(sum, params.add(p2, p1).unwrap());

    // Addition and doubling are consistent
    assert_eq!(params.double(p1).unwrap(), params.add(p1, p1).unwrap());

    // Negation
    assert_eq!(
        params.add(&sum, &params.neg(&sum)).unwrap(),
        AffinePoint::Identity
    );

    // Scalar multiplication distributes over scalar addition
    let scalar_mul = params.mul(p1, k).unwrap();
    assert_eq!(
        params.add(&scalar_mul, &scalar_mul).unwrap(),
        params.mul(p1, &(k + k)).unwrap()
    );

    // Shamir's trick agrees with separate multiplications
    assert_eq!(
        params.lincomb((p1, k), (p2, k)).unwrap(),
        params.mul(&sum, k).unwrap()
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let params = NamedCurve::Gost256A.params().unwrap();

    // Arbitrary coordinates are almost never on the curve; fall back to
    // multiples of the base point
    let p1 = params
        .point(
            BigUint::from_bytes_be(&data[0..32]),
            BigUint::from_bytes_be(&data[32..64]),
        )
        .unwrap_or_else(|_| {
            params
                .mul_by_generator(&BigUint::from_bytes_be(&data[0..32]))
                .unwrap()
        });
    let p2 = params
        .mul_by_generator(&BigUint::from_bytes_be(&data[32..64]))
        .unwrap();
    let k = BigUint::from_bytes_be(&data[64..96]);

    test_group(&params, &p1, &p2, &k);
});
