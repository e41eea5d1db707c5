use thiserror::Error;

use crate::shamir::ShareError;

/// All errors that can occur in scl.
#[derive(Debug, Error)]
pub enum SclError {
    // --- Secret sharing errors ---
    #[error(transparent)]
    Share(#[from] ShareError),

    // --- Format errors ---
    #[error("Format error: {0}")]
    Format(String),

    // --- Crypto errors ---
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Unknown digest '{0}'; run `scl digest list` for supported algorithms")]
    UnknownDigest(String),

    #[error("Verification failed: signature does not match")]
    VerificationFailed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for scl results.
pub type Result<T> = std::result::Result<T, SclError>;
