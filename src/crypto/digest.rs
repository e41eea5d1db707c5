//! Message digests and HMAC over the SHA-2 family.

use std::fmt;
use std::str::FromStr;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::errors::{Result, SclError};

/// Length of a generated HMAC key in bytes.
pub const HMAC_KEY_LEN: usize = 32;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha224 => 28,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = SclError;

    /// Case-insensitive; `sha-256` and `SHA256` both work.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| SclError::UnknownDigest(s.to_string()))
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash `data` with `alg`.
pub fn digest(alg: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match alg {
        DigestAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// HMAC of `data` under `key`.
pub fn hmac(alg: DigestAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    match alg {
        DigestAlgorithm::Sha224 => mac_with::<Hmac<Sha224>>(key, data),
        DigestAlgorithm::Sha256 => mac_with::<Hmac<Sha256>>(key, data),
        DigestAlgorithm::Sha384 => mac_with::<Hmac<Sha384>>(key, data),
        DigestAlgorithm::Sha512 => mac_with::<Hmac<Sha512>>(key, data),
    }
}

fn mac_with<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|e| SclError::Crypto(format!("HMAC init failed: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Generate a random HMAC key.
pub fn generate_hmac_key() -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; HMAC_KEY_LEN]);
    rand::rng().fill_bytes(&mut key);
    key
}

/// Compare two tags in constant time.
pub fn verify(expected: &[u8], actual: &[u8]) -> bool {
    expected.ct_eq(actual).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("sha256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!("SHA-512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha512);
        assert!("md5".parse::<DigestAlgorithm>().is_err());
        assert!("bad hash".parse::<DigestAlgorithm>().is_err());
    }

    #[test]
    fn sha256_known_answer() {
        let out = digest(DigestAlgorithm::Sha256, b"abc");
        assert_eq!(
            hex::encode(out),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn output_lengths_match() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(digest(alg, b"data").len(), alg.output_len(), "{alg}");
            assert_eq!(hmac(alg, b"k", b"data").unwrap().len(), alg.output_len(), "{alg}");
        }
    }

    #[test]
    fn hmac_known_answer() {
        // RFC 4231 test case 2.
        let out = hmac(
            DigestAlgorithm::Sha256,
            b"Jefe",
            b"what do ya want for nothing?",
        )
        .unwrap();
        assert_eq!(
            hex::encode(out),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn hmac_depends_on_key() {
        let a = hmac(DigestAlgorithm::Sha256, b"key-a", b"data").unwrap();
        let b = hmac(DigestAlgorithm::Sha256, b"key-b", b"data").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_keys_differ() {
        let a = generate_hmac_key();
        let b = generate_hmac_key();
        assert_eq!(a.len(), HMAC_KEY_LEN);
        assert_ne!(*a, *b);
    }

    #[test]
    fn verify_is_exact() {
        assert!(verify(b"same", b"same"));
        assert!(!verify(b"same", b"diff"));
        assert!(!verify(b"same", b"sam"));
    }
}
