use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShamirError>;

#[derive(Debug, Error)]
pub enum ShamirError {
    #[error("invalid split parameters: threshold {threshold}, share count {share_count}")]
    InvalidParameters { threshold: usize, share_count: usize },
    #[error("secret must be less than split modulus")]
    SecretTooLarge,
    #[error("lengths of shares ({shares}) and share numbers ({indices}) must match")]
    LengthMismatch { shares: usize, indices: usize },
    #[error("found negative share number {0}")]
    NegativeShareNumber(i64),
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),
    #[error("share coordinates have no inverse modulo the modulus")]
    NoModularInverse,
    /// A uniform sample was requested from `[0, 0)`.
    #[error("cannot sample from an empty range")]
    EmptyRange,
    #[error("modulus must be non-zero")]
    ZeroModulus,
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
