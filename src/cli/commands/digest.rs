//! `scl digest`: hashes and HMACs of files.
//!
//! Signatures and generated keys default to hex, and are read back as hex
//! unless an input format says otherwise.

use zeroize::Zeroizing;

use crate::cli::artifact::{emit, Artifact};
use crate::cli::{output, read_encoded, read_input, Context};
use crate::crypto::{self, digest::generate_hmac_key, DigestAlgorithm};
use crate::errors::{Result, SclError};
use crate::formats::Format;

const DEFAULT_FORMAT: Format = Format::Hex;

/// Execute `digest sign`.
pub fn execute_sign(ctx: &Context, input: &str, digest: Option<&str>) -> Result<()> {
    let alg = ctx.digest(digest)?;
    let data = read_input(input, "file to sign")?;
    let signature = crypto::digest(alg, &data);

    emit(
        ctx,
        ctx.output_format_or(DEFAULT_FORMAT),
        Some(input),
        &[Artifact::new(signature, ".sig")],
    )
}

/// Execute `digest verify`.
pub fn execute_verify(
    ctx: &Context,
    input: &str,
    signature: &str,
    digest: Option<&str>,
) -> Result<()> {
    let alg = ctx.digest(digest)?;
    let data = read_input(input, "file to verify")?;
    let expected = read_encoded(ctx, signature, "signature", DEFAULT_FORMAT)?;

    check(alg, &expected, &crypto::digest(alg, &data))
}

/// Execute `digest hmac`.
pub fn execute_hmac(
    ctx: &Context,
    input: &str,
    key_path: Option<&str>,
    digest: Option<&str>,
) -> Result<()> {
    let alg = ctx.digest(digest)?;
    let data = read_input(input, "file to sign")?;

    let (key, generated): (Zeroizing<Vec<u8>>, bool) = match key_path {
        Some(path) => (read_encoded(ctx, path, "HMAC key", DEFAULT_FORMAT)?, false),
        None => (generate_hmac_key(), true),
    };
    let tag = crypto::hmac(alg, &key, &data)?;

    let mut artifacts = vec![Artifact::new(tag, ".sig")];
    if generated {
        artifacts.push(Artifact::new(key.to_vec(), ".key"));
    }
    emit(ctx, ctx.output_format_or(DEFAULT_FORMAT), Some(input), &artifacts)
}

/// Execute `digest hmac-verify`.
pub fn execute_hmac_verify(
    ctx: &Context,
    input: &str,
    signature: &str,
    key_path: &str,
    digest: Option<&str>,
) -> Result<()> {
    let alg = ctx.digest(digest)?;
    let data = read_input(input, "file to verify")?;
    let expected = read_encoded(ctx, signature, "signature", DEFAULT_FORMAT)?;
    let key = read_encoded(ctx, key_path, "HMAC key", DEFAULT_FORMAT)?;

    check(alg, &expected, &crypto::hmac(alg, &key, &data)?)
}

/// Execute `digest list`.
pub fn execute_list() -> Result<()> {
    output::print_digest_table(&DigestAlgorithm::ALL);
    Ok(())
}

fn check(alg: DigestAlgorithm, expected: &[u8], actual: &[u8]) -> Result<()> {
    if crypto::verify(expected, actual) {
        output::success(&format!("Signature OK ({alg})"));
        Ok(())
    } else {
        Err(SclError::VerificationFailed)
    }
}
