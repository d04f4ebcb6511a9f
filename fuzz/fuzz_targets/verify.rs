#![no_main]
use gost3410::{
    dsa::{signature::hazmat::PrehashVerifier, Signature, SigningKey, VerifyingKey},
    BigUint, NamedCurve,
};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    let params = NamedCurve::Gost256Test.params().unwrap();

    // Decoding untrusted keys and signatures never panics
    if let Ok(vk) = VerifyingKey::from_slice(&params, &data[32..96]) {
        if let Ok(sig) = Signature::from_slice(&data[96..160]) {
            let _ = vk.verify_prehash(&data[0..32], &sig);
        }
    }

    // Honest signatures over arbitrary digests always verify
    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());
    let Ok(sk) = SigningKey::random(&params, &mut rng) else {
        return;
    };
    let e = BigUint::from_bytes_be(&data[32..96]);
    let sig = sk.sign_digest_value(&mut rng, &e).unwrap();
    assert!(sk.verifying_key().verify_digest_value(&e, &sig));
});
