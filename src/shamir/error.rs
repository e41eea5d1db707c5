use thiserror::Error;

/// Result type specialized for secret-sharing operations.
pub type ShareResult<T> = std::result::Result<T, ShareError>;

/// Errors raised by the secret-sharing engine.
///
/// Combining too few shares is deliberately absent from this list: it
/// produces a well-formed but unrelated secret instead of an error.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("Invalid threshold: minimum {minimum} must be at least 1 and no larger than shares {shares}")]
    InvalidThreshold { minimum: usize, shares: usize },

    #[error("Malformed share: {0}")]
    MalformedShare(String),

    #[error("Inconsistent shares: expected {expected} chunks, found a share with {found}")]
    InconsistentChunkCount { expected: usize, found: usize },

    #[error("Modular inverse of zero requested: duplicate x-coordinates in the share set")]
    ZeroInverse,

    #[error("Could not draw a unique random field element after {attempts} attempts")]
    EntropyExhausted { attempts: usize },
}
