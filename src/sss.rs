use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::error::{Result, ShamirError};
use crate::sampler::sample;

/// Splits `secret` into `share_count` shares, any `threshold` of which recover it.
///
/// Share `i` (zero based) is the evaluation of a random polynomial of degree
/// `threshold - 1` at `x = i + 1`, reduced modulo `modulus`. The constant term
/// of the polynomial is the secret. Pass the position of each share to
/// [`join`](crate::join) as its share number.
pub fn split<R: RngCore + ?Sized>(
    secret: &BigUint,
    modulus: &BigUint,
    threshold: usize,
    share_count: usize,
    rng: &mut R,
) -> Result<Vec<BigUint>> {
    if threshold < 1 || share_count < threshold {
        return Err(ShamirError::InvalidParameters {
            threshold,
            share_count,
        });
    }

    if secret >= modulus {
        return Err(ShamirError::SecretTooLarge);
    }

    debug!(
        "splitting secret into {} shares, threshold {}, {}-bit modulus",
        share_count,
        threshold,
        modulus.bits()
    );

    let polynomial = sample_polynomial(secret, modulus, threshold, rng)?;
    Ok(evaluate_polynomial(&polynomial, modulus, share_count))
}

/// Returns `threshold` coefficients with `secret` as the constant term.
///
/// The remaining coefficients are uniform over `[1, modulus - 1]`; zero is
/// excluded so the leading term never vanishes.
pub fn sample_polynomial<R: RngCore + ?Sized>(
    secret: &BigUint,
    modulus: &BigUint,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<BigUint>> {
    if modulus.is_zero() {
        return Err(ShamirError::ZeroModulus);
    }
    let bound = modulus - 1u32;

    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret.clone());
    for _ in 1..threshold {
        coefficients.push(sample(&bound, rng)? + 1u32);
    }
    Ok(coefficients)
}

/// Evaluates the polynomial at `x = 1..=share_count`.
pub fn evaluate_polynomial(
    coefficients: &[BigUint],
    modulus: &BigUint,
    share_count: usize,
) -> Vec<BigUint> {
    (1..=share_count as u64)
        .map(|x| mod_evaluate_polynomial(coefficients, &BigUint::from(x), modulus))
        .collect()
}

/// Horner evaluation of `coefficients` at `point`, reducing at every step.
pub fn mod_evaluate_polynomial(
    coefficients: &[BigUint],
    point: &BigUint,
    modulus: &BigUint,
) -> BigUint {
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| (acc * point + c) % modulus)
}
