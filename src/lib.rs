//! Shamir threshold secret sharing over `Z/modulus` with arbitrary-precision integers.

pub mod error;
pub mod lagrange;
pub mod params;
pub mod primes;
pub mod sampler;
pub mod share;
pub mod source;
pub mod sss;

pub use error::*;
pub use lagrange::*;
pub use params::*;
pub use sampler::*;
pub use share::*;
pub use source::*;
pub use sss::*;
