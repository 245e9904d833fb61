//! Shares that carry their own evaluation point.
//!
//! [`split`](crate::split) and [`join`](crate::join) identify a share by its
//! zero based position, with the evaluation point implied as `position + 1`.
//! A [`Share`] stores the point explicitly, so shares can be stored and
//! exchanged without that convention. [`Share::index`] and
//! [`Share::from_index`] convert between the two.

use std::fmt;

use num_bigint::BigUint;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lagrange::lagrange_interpolation_at_zero;
use crate::sss::split;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Evaluation point, `1..=share_count` for shares from [`split_shares`].
    pub x: u64,
    pub value: BigUint,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("bits", &self.value.bits())
            .field("value", &"***")
            .finish()
    }
}

impl Share {
    pub fn new(x: u64, value: BigUint) -> Self {
        Share { x, value }
    }

    /// Builds a share from its zero based position in the output of `split`.
    ///
    /// Returns `None` when `index + 1` does not fit in a `u64`.
    pub fn from_index(index: u64, value: BigUint) -> Option<Self> {
        index.checked_add(1).map(|x| Share { x, value })
    }

    /// The zero based share number expected by `join`, if this share has one.
    pub fn index(&self) -> Option<i64> {
        self.x.checked_sub(1).and_then(|i| i64::try_from(i).ok())
    }
}

/// Like [`split`], but tags each share with its evaluation point.
pub fn split_shares<R: RngCore + ?Sized>(
    secret: &BigUint,
    modulus: &BigUint,
    threshold: usize,
    share_count: usize,
    rng: &mut R,
) -> Result<Vec<Share>> {
    let values = split(secret, modulus, threshold, share_count, rng)?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(i, value)| Share::new(i as u64 + 1, value))
        .collect())
}

/// Interpolates the secret from shares carrying their own evaluation points.
///
/// The same caveat as [`join`](crate::join) applies: inconsistent or too few
/// shares produce an unrelated value rather than an error.
pub fn join_shares(shares: &[Share], modulus: &BigUint) -> Result<BigUint> {
    let points = shares
        .iter()
        .map(|share| BigUint::from(share.x))
        .collect::<Vec<_>>();
    let values = shares
        .iter()
        .map(|share| share.value.clone())
        .collect::<Vec<_>>();
    lagrange_interpolation_at_zero(&points, &values, modulus)
}
