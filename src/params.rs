use num_bigint::BigUint;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShamirError};
use crate::lagrange::join;
use crate::share::{join_shares, split_shares, Share};
use crate::sss::split;

/// Public parameters of a sharing: the modulus plus the (k, n) access structure.
///
/// Serialized with the modulus as a hexadecimal string, for example
///
/// ```json
/// { "modulus": "0x7fffffffffffffffffffffffffffffff", "threshold": 3, "share_count": 5 }
/// ```
///
/// Deserializing always runs [`Parameters::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    #[serde(with = "hex_modulus")]
    pub modulus: BigUint,
    pub threshold: usize,
    pub share_count: usize,
}

// unvalidated wire form of Parameters
#[derive(Deserialize)]
struct RawParameters {
    #[serde(with = "hex_modulus")]
    modulus: BigUint,
    threshold: usize,
    share_count: usize,
}

impl TryFrom<RawParameters> for Parameters {
    type Error = ShamirError;

    fn try_from(raw: RawParameters) -> Result<Self> {
        Parameters::new(raw.modulus, raw.threshold, raw.share_count)
    }
}

impl Parameters {
    pub fn new(modulus: BigUint, threshold: usize, share_count: usize) -> Result<Self> {
        let params = Parameters {
            modulus,
            threshold,
            share_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parses and validates parameters from JSON.
    ///
    /// Unlike going through `serde_json` directly, validation failures keep
    /// their own error variant instead of becoming [`ShamirError::Config`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawParameters = serde_json::from_str(json)?;
        Parameters::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold < 1 || self.share_count < self.threshold {
            return Err(ShamirError::InvalidParameters {
                threshold: self.threshold,
                share_count: self.share_count,
            });
        }
        if self.modulus < BigUint::from(2u32) {
            return Err(ShamirError::InvalidModulus(format!(
                "modulus must be at least 2, got {}",
                self.modulus
            )));
        }
        Ok(())
    }

    pub fn split<R: RngCore + ?Sized>(&self, secret: &BigUint, rng: &mut R) -> Result<Vec<BigUint>> {
        split(secret, &self.modulus, self.threshold, self.share_count, rng)
    }

    pub fn join(&self, shares: &[BigUint], share_numbers: &[i64]) -> Result<BigUint> {
        join(shares, share_numbers, &self.modulus)
    }

    pub fn split_shares<R: RngCore + ?Sized>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        split_shares(secret, &self.modulus, self.threshold, self.share_count, rng)
    }

    pub fn join_shares(&self, shares: &[Share]) -> Result<BigUint> {
        join_shares(shares, &self.modulus)
    }
}

/// Parses a hexadecimal modulus. A `0x` prefix and embedded whitespace are
/// accepted, so constants can be pasted in the grouped form RFCs print them in.
pub fn parse_modulus(hex: &str) -> Result<BigUint> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ShamirError::InvalidModulus(format!("not a hexadecimal number: {:?}", hex)))
}

mod hex_modulus {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(modulus: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:#x}", modulus))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_modulus(&s).map_err(de::Error::custom)
    }
}
