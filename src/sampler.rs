use log::trace;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::error::{Result, ShamirError};

/// Returns a uniform random value in `[0, bound)`.
///
/// Draws just enough big-endian bytes to cover `bound`, clears the bits of the
/// leading byte above its highest set bit and redraws until the candidate is
/// below `bound`. At most half of the draws are rejected. Only a failure of
/// `rng` ends the loop without a sample.
pub fn sample<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(ShamirError::EmptyRange);
    }

    let bits = bound.bits();
    let mut bytes = vec![0u8; ((bits + 7) / 8) as usize];

    // number of bits used in the most significant byte of bound
    let top_bits = match bits % 8 {
        0 => 8,
        r => r,
    };
    let mask = ((1u16 << top_bits) - 1) as u8;

    loop {
        rng.try_fill_bytes(&mut bytes)?;
        bytes[0] &= mask;

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < bound {
            return Ok(candidate);
        }
        trace!("rejected {}-bit candidate, redrawing", bits);
    }
}
