//! RSA key pairs and PKCS#1 v1.5 signatures over SHA-256.
//!
//! Generated private keys are PKCS#1 PEM and public keys are SPKI PEM.
//! `load_key` accepts PKCS#1 or PKCS#8 for private keys, SPKI or PKCS#1
//! for public keys, each as PEM or DER.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::rand_core::OsRng;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::{Result, SclError};

/// Modulus size used by `scl rsa generate` without `--key-size`.
pub const DEFAULT_KEY_BITS: usize = 2048;

pub const MIN_KEY_BITS: usize = 1024;
pub const MAX_KEY_BITS: usize = 8192;

/// A freshly generated key pair, already PEM-encoded.
pub struct KeyPair {
    pub public_pem: String,
    pub private_pem: Zeroizing<String>,
}

/// A key read back from disk.
pub enum RsaKey {
    Private(RsaPrivateKey),
    Public(RsaPublicKey),
}

impl RsaKey {
    /// The public half, which is all verification needs.
    pub fn public_key(&self) -> RsaPublicKey {
        match self {
            RsaKey::Private(key) => key.to_public_key(),
            RsaKey::Public(key) => key.clone(),
        }
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public_key().size() * 8
    }

    pub fn is_private(&self) -> bool {
        matches!(self, RsaKey::Private(_))
    }
}

/// Generate a key pair with a `bits`-bit modulus.
pub fn generate(bits: usize) -> Result<KeyPair> {
    if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) || bits % 8 != 0 {
        return Err(SclError::Crypto(format!(
            "RSA key size must be a multiple of 8 between {MIN_KEY_BITS} and {MAX_KEY_BITS}, got {bits}"
        )));
    }

    let private = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| SclError::Crypto(format!("couldn't generate {bits}-bit RSA key: {e}")))?;
    tracing::debug!(bits, "generated RSA key pair");

    let private_pem = private
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| SclError::Crypto(format!("cannot encode RSA private key: {e}")))?;
    let public_pem = private
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| SclError::Crypto(format!("cannot encode RSA public key: {e}")))?;

    Ok(KeyPair {
        public_pem,
        private_pem,
    })
}

/// Parse a private or public key from PEM text or DER bytes.
pub fn load_key(bytes: &[u8]) -> Result<RsaKey> {
    let parsed = match std::str::from_utf8(bytes) {
        Ok(text) => parse_pem(text.trim()),
        Err(_) => parse_der(bytes),
    };
    parsed.ok_or_else(|| SclError::Crypto("unable to construct an RSA key from the input".into()))
}

fn parse_pem(pem: &str) -> Option<RsaKey> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .ok()
        .or_else(|| RsaPrivateKey::from_pkcs8_pem(pem).ok())
        .map(RsaKey::Private)
        .or_else(|| {
            RsaPublicKey::from_public_key_pem(pem)
                .ok()
                .or_else(|| RsaPublicKey::from_pkcs1_pem(pem).ok())
                .map(RsaKey::Public)
        })
}

fn parse_der(der: &[u8]) -> Option<RsaKey> {
    RsaPrivateKey::from_pkcs1_der(der)
        .ok()
        .or_else(|| RsaPrivateKey::from_pkcs8_der(der).ok())
        .map(RsaKey::Private)
        .or_else(|| {
            RsaPublicKey::from_public_key_der(der)
                .ok()
                .or_else(|| RsaPublicKey::from_pkcs1_der(der).ok())
                .map(RsaKey::Public)
        })
}

/// Sign `data` with SHA-256 and PKCS#1 v1.5 padding. Needs a private key.
pub fn sign(key: &RsaKey, data: &[u8]) -> Result<Vec<u8>> {
    let RsaKey::Private(private) = key else {
        return Err(SclError::Crypto(
            "signing needs a private key, but a public key was given".into(),
        ));
    };

    let signing_key = SigningKey::<Sha256>::new(private.clone());
    let signature = signing_key
        .try_sign(data)
        .map_err(|e| SclError::Crypto(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Check a signature made by [`sign`]. Either half of the pair works.
pub fn verify(key: &RsaKey, data: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    VerifyingKey::<Sha256>::new(key.public_key())
        .verify(data, &signature)
        .is_ok()
}
