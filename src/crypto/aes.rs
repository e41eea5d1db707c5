//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use crate::errors::{Result, SclError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of an AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A cipher offered by `scl aes`.
#[derive(Debug, Clone, Copy)]
pub struct CipherInfo {
    pub name: &'static str,
    pub key_bits: usize,
    pub nonce_bytes: usize,
}

/// Ciphers listed by `scl aes ciphers`.
pub const CIPHERS: &[CipherInfo] = &[CipherInfo {
    name: "aes-256-gcm",
    key_bits: KEY_LEN * 8,
    nonce_bytes: NONCE_LEN,
}];

/// Generate a random 32-byte key.
pub fn generate_key() -> Zeroizing<Vec<u8>> {
    Zeroizing::new(Aes256Gcm::generate_key(&mut OsRng).to_vec())
}

/// Encrypt `plaintext`, generating a key when none is given.
///
/// Returns `(nonce || ciphertext, key)`.
pub fn encrypt(key: Option<&[u8]>, plaintext: &[u8]) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let key = match key {
        Some(bytes) => Zeroizing::new(bytes.to_vec()),
        None => generate_key(),
    };

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| {
        SclError::Crypto(format!(
            "AES-256 key must be {KEY_LEN} bytes, got {}",
            key.len()
        ))
    })?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SclError::Crypto(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok((output, key))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Every failure maps to the same error so callers learn nothing about
/// which check rejected the input.
pub fn decrypt(key: &[u8], ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    let failed = || SclError::Crypto("decryption failed: wrong key or corrupted data".into());

    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(failed());
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| failed())?;

    cipher.decrypt(nonce, ciphertext).map_err(|_| failed())
}
