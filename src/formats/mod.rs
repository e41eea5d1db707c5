//! Text encodings applied to command output and input.
//!
//! The CLI passes every artifact it writes (shares, digests, keys,
//! ciphertexts) through a [`Format`], and decodes key and signature files
//! back through one. The secret-sharing engine never sees these.

mod auto;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SclError};

/// An output/input encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Standard base64 with padding.
    Base64,
    /// Lowercase hex.
    Hex,
    /// Bytes as-is.
    Binary,
    /// `Binary` for printable data, `Base64` otherwise.
    Auto,
}

impl Format {
    /// Names accepted by [`Format::from_name`], for help and error text.
    pub const NAMES: [&'static str; 4] = ["auto", "base64", "hex", "binary"];

    /// Parse a format name. Case-insensitive; surrounding whitespace ignored.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(Format::Auto),
            "base64" => Ok(Format::Base64),
            "hex" => Ok(Format::Hex),
            "binary" | "text" | "none" => Ok(Format::Binary),
            other => Err(SclError::Format(format!(
                "unknown format '{other}', supported: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Auto => "auto",
            Format::Base64 => "base64",
            Format::Hex => "hex",
            Format::Binary => "binary",
        }
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Format::Base64 => BASE64.encode(data).into_bytes(),
            Format::Hex => hex::encode(data).into_bytes(),
            Format::Binary => data.to_vec(),
            Format::Auto => auto::pick_encoding(data).encode(data),
        }
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Format::Base64 => {
                let compact: Vec<u8> = data
                    .iter()
                    .copied()
                    .filter(|b| !b.is_ascii_whitespace())
                    .collect();
                BASE64
                    .decode(compact)
                    .map_err(|e| SclError::Format(format!("invalid base64: {e}")))
            }
            Format::Hex => hex::decode(data.trim_ascii())
                .map_err(|e| SclError::Format(format!("invalid hex: {e}"))),
            Format::Binary => Ok(data.to_vec()),
            Format::Auto => auto::pick_decoding(data).decode(data),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(Format::from_name("base64").unwrap(), Format::Base64);
        assert_eq!(Format::from_name("HEX").unwrap(), Format::Hex);
        assert_eq!(Format::from_name("text").unwrap(), Format::Binary);
        assert_eq!(Format::from_name("none").unwrap(), Format::Binary);
        assert_eq!(Format::from_name("").unwrap(), Format::Auto);
        assert_eq!(Format::from_name(" auto ").unwrap(), Format::Auto);
    }

    #[test]
    fn unsupported_formats_are_rejected() {
        assert!(Format::from_name("words").is_err());
        assert!(Format::from_name("qrcode").is_err());
    }

    #[test]
    fn name_round_trips() {
        for name in Format::NAMES {
            assert_eq!(Format::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn base64_ignores_line_breaks() {
        let decoded = Format::Base64.decode(b"aGVs\nbG8=\n").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn hex_is_lowercase_and_trimmed() {
        assert_eq!(Format::Hex.encode(&[0xAB, 0x01]), b"ab01");
        assert_eq!(Format::Hex.decode(b"  AB01\n").unwrap(), vec![0xAB, 0x01]);
        assert!(Format::Hex.decode(b"abc").is_err());
        assert!(Format::Hex.decode(b"zz").is_err());
    }

    #[test]
    fn binary_is_identity() {
        let data = [0u8, 255, 10, 13];
        assert_eq!(Format::Binary.encode(&data), data);
        assert_eq!(Format::Binary.decode(&data).unwrap(), data);
    }
}
