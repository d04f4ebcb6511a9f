//! Prime field and scalar helpers on top of [`BigUint`].

use crate::{byte_len, Error, Result};
use alloc::vec;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Upper bound on rejection sampling rounds in [`random_nonzero_scalar`].
///
/// Each round succeeds with probability above 1/2 for any bound, so hitting
/// this means the random source is broken.
const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// Compute the inverse of `value` modulo `modulus` using the extended
/// Euclidean algorithm.
///
/// `value` is reduced modulo `modulus` first. The result `w` satisfies
/// `0 <= w < modulus` and `value * w ≡ 1 (mod modulus)`.
///
/// Returns [`Error::NoInverse`] if `gcd(value, modulus) != 1`, which includes
/// `value ≡ 0 (mod modulus)`, or if `modulus < 2`.
pub fn invert(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if *modulus <= BigUint::one() {
        return Err(Error::NoInverse);
    }

    // Invariant: t * value ≡ r (mod modulus) for both (old_t, old_r) and (t, r)
    let mut old_r = modulus.clone();
    let mut r = value % modulus;
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = core::mem::replace(&mut r, remainder);

        let next_t = &old_t - BigInt::from(quotient) * &t;
        old_t = core::mem::replace(&mut t, next_t);
    }

    if !old_r.is_one() {
        return Err(Error::NoInverse);
    }

    let (_, magnitude) = old_t.mod_floor(&BigInt::from(modulus.clone())).into_parts();
    Ok(magnitude)
}

/// Primes used for trial division and as Miller-Rabin witnesses.
const SMALL_PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Miller-Rabin probable-prime test with the bases in [`SMALL_PRIMES`].
///
/// Exact for `n < 3.3·10²⁴`; above that a composite passes only if it is a
/// strong pseudoprime to all twenty bases.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    if *n <= one {
        return false;
    }

    for &small in &SMALL_PRIMES {
        let small = BigUint::from(small);
        if *n == small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    // n - 1 = d·2ˢ with d odd
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &base in &SMALL_PRIMES {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Compute `(lhs - rhs) mod modulus` without going through negative values.
pub(crate) fn sub_mod(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    let lhs = lhs % modulus;
    let rhs = rhs % modulus;

    if lhs >= rhs {
        lhs - rhs
    } else {
        modulus - rhs + lhs
    }
}

/// Compute `-value mod modulus`.
pub(crate) fn neg_mod(value: &BigUint, modulus: &BigUint) -> BigUint {
    sub_mod(&BigUint::zero(), value, modulus)
}

/// Draw a scalar uniformly from `[1, bound - 1]`.
///
/// Candidates are read as big-endian integers with the bits above the bit
/// length of `bound` masked off, then rejected until one lands in range.
pub(crate) fn random_nonzero_scalar(
    rng: &mut impl CryptoRngCore,
    bound: &BigUint,
) -> Result<BigUint> {
    if *bound <= BigUint::one() {
        return Err(Error::ScalarOutOfRange);
    }

    let bits = bound.bits();
    let len = byte_len(bits);
    let excess = u64::try_from(len)
        .map_err(|_| Error::ScalarOutOfRange)?
        .saturating_mul(8)
        - bits;
    let mask = 0xFFu8 >> excess;
    let mut buf = Zeroizing::new(vec![0u8; len]);

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < *bound {
            return Ok(candidate);
        }
    }

    Err(Error::RetryLimitExceeded)
}
