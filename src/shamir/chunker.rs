//! Conversion between secret bytes and field-sized chunks.
//!
//! A secret is cut into 32-byte chunks, the last one right-padded with
//! zeros. Decoding strips trailing zero bytes from every chunk, which
//! means a secret whose 32-byte blocks end in `0x00` loses those bytes.
//! Callers sharing such data must length-prefix or escape it first.

use super::field::FieldElement;

/// Secret bytes carried by one chunk.
pub const CHUNK_BYTES: usize = 32;

/// Split a secret into chunks, in byte order.
pub fn encode(secret: &[u8]) -> Vec<FieldElement> {
    secret
        .chunks(CHUNK_BYTES)
        .map(|piece| {
            let mut block = [0u8; CHUNK_BYTES];
            block[..piece.len()].copy_from_slice(piece);
            FieldElement::from_chunk(&block)
        })
        .collect()
}

/// Reassemble secret bytes from chunks.
///
/// A chunk that does not fit in 256 bits (only possible when interpolating
/// from a wrong share set) is rendered from its low 256 bits.
pub fn decode(chunks: &[FieldElement]) -> Vec<u8> {
    let mut secret = Vec::with_capacity(chunks.len() * CHUNK_BYTES);
    for chunk in chunks {
        let block = chunk.to_chunk();
        let end = block.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        secret.extend_from_slice(&block[..end]);
    }
    secret
}

/// Number of chunks a secret of `len` bytes occupies.
pub fn chunk_count(len: usize) -> usize {
    len.div_ceil(CHUNK_BYTES)
}
