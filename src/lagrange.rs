use log::{debug, warn};
use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};

use crate::error::{Result, ShamirError};

/// Recovers the secret from shares produced by [`split`](crate::split).
///
/// `share_numbers[m]` is the zero based position of `shares[m]` in the output of
/// `split`, so the share was evaluated at `x = share_numbers[m] + 1`. The shares
/// may be presented in any order.
///
/// Exactly `threshold` shares of one split reproduce the secret. Fewer shares,
/// shares from different splits or corrupted values yield an unrelated value and
/// no error: nothing here checks that the shares are consistent.
pub fn join(shares: &[BigUint], share_numbers: &[i64], modulus: &BigUint) -> Result<BigUint> {
    if shares.len() != share_numbers.len() {
        return Err(ShamirError::LengthMismatch {
            shares: shares.len(),
            indices: share_numbers.len(),
        });
    }

    if let Some(&negative) = share_numbers.iter().find(|&&n| n < 0) {
        return Err(ShamirError::NegativeShareNumber(negative));
    }

    debug!(
        "joining {} shares over {}-bit modulus",
        shares.len(),
        modulus.bits()
    );

    let points = share_numbers
        .iter()
        .map(|&n| BigUint::from(n as u64) + 1u32)
        .collect::<Vec<_>>();
    lagrange_interpolation_at_zero(&points, shares, modulus)
}

/// Performs a Lagrange interpolation in `Z/modulus` at the origin for the
/// polynomial through (`points[i]`, `values[i]`).
///
/// The basis value for share `i` is the product over `j != i` of
/// `x_j * (x_j - x_i)^-1`. Repeated points, or a difference sharing a factor
/// with a composite modulus, fail with [`ShamirError::NoModularInverse`].
pub fn lagrange_interpolation_at_zero(
    points: &[BigUint],
    values: &[BigUint],
    modulus: &BigUint,
) -> Result<BigUint> {
    if points.len() != values.len() {
        return Err(ShamirError::LengthMismatch {
            shares: values.len(),
            indices: points.len(),
        });
    }
    if modulus.is_zero() {
        return Err(ShamirError::ZeroModulus);
    }

    let mut acc = BigUint::zero();

    for (i, (xi, yi)) in points.iter().zip(values).enumerate() {
        let xi_reduced = xi % modulus;
        let mut basis = BigUint::one();

        for (j, xj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            // (x_j - x_i) normalized into [0, modulus)
            let den = (xj % modulus + modulus - &xi_reduced) % modulus;
            let den_inv = mod_inverse(&den, modulus).ok_or_else(|| {
                warn!("points {} and {} differ by a non-invertible value", xi, xj);
                ShamirError::NoModularInverse
            })?;
            basis = basis * xj % modulus * den_inv % modulus;
        }

        acc += basis * yi;
    }

    Ok(acc % modulus)
}

/// Returns `y` in `[0, modulus)` with `value * y = 1 (mod modulus)`, if one exists.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }
    let m = BigInt::from(modulus.clone());
    let ExtendedGcd { gcd, x, .. } = BigInt::from(value.clone()).extended_gcd(&m);
    if !gcd.is_one() {
        return None;
    }
    // the Bezout coefficient may be negative
    x.mod_floor(&m).to_biguint()
}
