//! Cryptographic primitives behind the non-sharing commands.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`aes`)
//! - SHA-2 digests and HMAC (`digest`)
//! - RSA key pairs and SHA-256 signatures (`rsa`)

pub mod aes;
pub mod digest;
pub mod rsa;

pub use aes::{decrypt, encrypt};
pub use digest::{digest, hmac, verify, DigestAlgorithm};
