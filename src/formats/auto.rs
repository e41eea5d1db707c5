//! Format detection for `auto`.

use std::sync::LazyLock;

use regex::bytes::Regex;

use super::Format;

/// Pick `Binary` for printable ASCII (newlines allowed), `Base64` otherwise.
pub(super) fn pick_encoding(data: &[u8]) -> Format {
    let printable = data
        .iter()
        .all(|&b| b == b'\n' || (32..=126).contains(&b));
    if printable {
        Format::Binary
    } else {
        Format::Base64
    }
}

/// Anything outside the base64 alphabet (plus line breaks) is raw data.
pub(super) fn pick_decoding(data: &[u8]) -> Format {
    if data.is_empty() || NON_BASE64.is_match(data) {
        Format::Binary
    } else {
        Format::Base64
    }
}

static NON_BASE64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:[^A-Za-z0-9+/=\r\n])").expect("static pattern is valid"));
