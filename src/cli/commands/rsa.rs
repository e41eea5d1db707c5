//! `scl rsa`: RSA key pairs and SHA-256 file signatures.
//!
//! Keys are PEM text, so the auto format writes them as-is. Signatures are
//! binary and come out base64 unless an output format says otherwise.

use crate::cli::artifact::{emit, Artifact};
use crate::cli::{output, read_encoded, read_input, Context};
use crate::crypto::rsa::{self, RsaKey};
use crate::errors::{Result, SclError};
use crate::formats::Format;

/// Base name for `rsa generate` output when `-o` is not given.
const DEFAULT_BASE: &str = "rsa-keypair";

/// Execute `rsa generate`.
pub fn execute_generate(ctx: &Context, key_size: usize) -> Result<()> {
    let pair = rsa::generate(key_size)?;

    emit(
        ctx,
        ctx.output_format_or(Format::Auto),
        Some(DEFAULT_BASE),
        &[
            Artifact::new(pair.public_pem.into_bytes(), ".pub"),
            Artifact::new(pair.private_pem.as_bytes(), ".priv"),
        ],
    )?;

    if ctx.output_file.as_deref() != Some("-") {
        output::tip("Share the .pub file; keep the .priv file to yourself.");
    }
    Ok(())
}

/// Execute `rsa sign`.
pub fn execute_sign(ctx: &Context, input: &str, priv_key: &str) -> Result<()> {
    let key = load_key(ctx, priv_key, "private key")?;
    let data = read_input(input, "file to sign")?;
    let signature = rsa::sign(&key, &data)?;

    emit(
        ctx,
        ctx.output_format_or(Format::Auto),
        Some(input),
        &[Artifact::new(signature, ".sig")],
    )
}

/// Execute `rsa verify` with whichever key file was given.
pub fn execute_verify(ctx: &Context, input: &str, signature: &str, key_path: &str) -> Result<()> {
    let key = load_key(ctx, key_path, "key")?;
    let data = read_input(input, "file to verify")?;
    let signature = read_encoded(ctx, signature, "signature", Format::Auto)?;

    if rsa::verify(&key, &data, &signature) {
        output::success(&format!("Signature OK (rsa-{}, sha256)", key.bits()));
        Ok(())
    } else {
        Err(SclError::VerificationFailed)
    }
}

fn load_key(ctx: &Context, path: &str, what: &str) -> Result<RsaKey> {
    let decoded = read_encoded(ctx, path, what, Format::Auto)?;
    rsa::load_key(&decoded).map_err(|e| SclError::CommandFailed(format!("{what} '{path}': {e}")))
}
