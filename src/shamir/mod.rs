//! Threshold secret sharing (Shamir) over a 257-bit prime field.
//!
//! [`generate`] splits a secret into `shares` strings such that any
//! `minimum` of them rebuild it with [`combine`].
//!
//! **Combining fewer than `minimum` shares is not an error.** The result is
//! a deterministic byte string unrelated to the secret, so callers cannot
//! rely on an error to detect an insufficient share set. Mixing shares
//! from different `generate` calls is likewise undetected.
//!
//! Shares carry no integrity protection and no metadata. Trailing zero
//! bytes at the end of each 32-byte block of the secret are dropped on
//! reconstruction (see [`chunker`]).

pub mod chunker;
pub mod codec;
pub mod combiner;
pub mod error;
pub mod field;
pub mod generator;
pub mod polynomial;
pub mod uniqueness;

pub use codec::SharePoint;
pub use combiner::combine;
pub use error::{ShareError, ShareResult};
pub use field::FieldElement;
pub use generator::SecretShare;

/// Split `secret` into `shares` share strings, any `minimum` of which
/// reconstruct it.
pub fn generate(secret: &[u8], minimum: usize, shares: usize) -> ShareResult<Vec<String>> {
    SecretShare::new(minimum, shares)?.generate(secret)
}
