//! Share string format.
//!
//! A share is a concatenation of points, one per secret chunk. Each point
//! is its `x` then its `y` coordinate, each a 33-byte big-endian field
//! element in URL-safe base64 (44 characters, no padding):
//!
//! ```text
//! [x_0: 44 chars][y_0: 44 chars][x_1: 44 chars][y_1: 44 chars] ...
//! ```
//!
//! There is no header, length prefix or checksum; the chunk count is the
//! share length divided by [`ENCODED_POINT_LEN`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::error::{ShareError, ShareResult};
use super::field::FieldElement;

/// Characters used by one encoded field element.
pub const ENCODED_FIELD_LEN: usize = 44;

/// Characters used by one encoded point.
pub const ENCODED_POINT_LEN: usize = 2 * ENCODED_FIELD_LEN;

/// One evaluation of one chunk's polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePoint {
    pub x: FieldElement,
    pub y: FieldElement,
}

/// Serialize a share's points, in chunk order.
pub fn encode_share(points: &[SharePoint]) -> String {
    let mut share = String::with_capacity(points.len() * ENCODED_POINT_LEN);
    for point in points {
        URL_SAFE_NO_PAD.encode_string(point.x.to_bytes(), &mut share);
        URL_SAFE_NO_PAD.encode_string(point.y.to_bytes(), &mut share);
    }
    share
}

/// Parse a share string back into its points.
pub fn decode_share(share: &str) -> ShareResult<Vec<SharePoint>> {
    if !share.is_ascii() {
        return Err(ShareError::MalformedShare(
            "share contains non-ASCII characters".into(),
        ));
    }

    if share.len() % ENCODED_POINT_LEN != 0 {
        return Err(ShareError::MalformedShare(format!(
            "share length {} is not a multiple of {ENCODED_POINT_LEN}",
            share.len()
        )));
    }

    share
        .as_bytes()
        .chunks(ENCODED_POINT_LEN)
        .map(|pair| {
            let (x, y) = pair.split_at(ENCODED_FIELD_LEN);
            Ok(SharePoint {
                x: decode_field(x)?,
                y: decode_field(y)?,
            })
        })
        .collect()
}

fn decode_field(encoded: &[u8]) -> ShareResult<FieldElement> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| ShareError::MalformedShare(format!("invalid base64 field: {e}")))?;
    FieldElement::from_bytes(&bytes)
}
