//! `scl aes`: AES-256-GCM file encryption.

use crate::cli::artifact::{emit, Artifact};
use crate::cli::{output, read_encoded, read_input, Context};
use crate::crypto::aes::{self, CIPHERS};
use crate::errors::Result;
use crate::formats::Format;

/// Execute `aes encrypt`.
///
/// Writes `<base>.enc`, plus `<base>.key` when no key was supplied.
pub fn execute_encrypt(ctx: &Context, input: &str, key_path: Option<&str>) -> Result<()> {
    let plaintext = read_input(input, "file to encrypt")?;
    let supplied = key_path
        .map(|path| read_encoded(ctx, path, "key", Format::Auto))
        .transpose()?;

    let (ciphertext, key) = aes::encrypt(supplied.as_deref().map(Vec::as_slice), &plaintext)?;

    let mut artifacts = vec![Artifact::new(ciphertext, ".enc")];
    if supplied.is_none() {
        artifacts.push(Artifact::new(key.to_vec(), ".key"));
    }
    emit(ctx, ctx.output_format_or(Format::Auto), Some(input), &artifacts)?;

    if supplied.is_none() {
        output::tip("Keep the .key file apart from the .enc file, or split it with `scl sss generate`.");
    }
    Ok(())
}

/// Execute `aes decrypt`. The plaintext is always written raw.
pub fn execute_decrypt(ctx: &Context, input: &str, key_path: &str) -> Result<()> {
    let key = read_encoded(ctx, key_path, "key", Format::Auto)?;
    let ciphertext = read_encoded(ctx, input, "encrypted file", Format::Auto)?;

    let plaintext = aes::decrypt(&key, &ciphertext)?;
    emit(ctx, Format::Binary, None, &[Artifact::new(plaintext, ".dec")])
}

/// Execute `aes ciphers`.
pub fn execute_ciphers() -> Result<()> {
    output::print_cipher_table(CIPHERS);
    Ok(())
}
