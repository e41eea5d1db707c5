//! `scl sss`: split a secret into shares and combine them again.

use tracing::debug;

use crate::cli::artifact::{emit, Artifact};
use crate::cli::{output, read_input, Context};
use crate::errors::{Result, SclError};
use crate::formats::Format;
use crate::shamir::{self, codec};

/// Execute `sss generate`.
pub fn execute_generate(
    ctx: &Context,
    input: &str,
    min_shares: usize,
    num_shares: usize,
) -> Result<()> {
    let secret = read_input(input, "secret")?;
    if secret.is_empty() {
        return Err(SclError::CommandFailed(format!(
            "secret '{input}' is empty, nothing to share"
        )));
    }

    let shares = shamir::generate(&secret, min_shares, num_shares)?;
    let joined = shares.join("\n");

    let format = ctx.output_format_or(Format::Auto);
    emit(
        ctx,
        format,
        Some(&ctx.settings.share_file),
        &[Artifact::new(joined, ".txt")],
    )?;

    if ctx.output_file.as_deref() != Some("-") {
        output::tip(&format!(
            "Hand out one line per holder; any {min_shares} of {num_shares} recover the secret."
        ));
    }
    Ok(())
}

/// Execute `sss combine`.
pub fn execute_combine(ctx: &Context, input: &str) -> Result<()> {
    let raw = read_input(input, "share file")?;
    let shares = parse_share_file(&raw, ctx.input_format())?;
    debug!(shares = shares.len(), "combining");

    let secret = shamir::combine(&shares)?;

    emit(
        ctx,
        ctx.output_format_or(Format::Binary),
        None,
        &[Artifact::new(secret, ".sec")],
    )
}

/// Split a share file into one share per non-blank line.
///
/// With no explicit input format the file is first tried as raw share
/// lines. Only if that fails is it run through auto-detection, since a
/// share line can look like plain base64.
fn parse_share_file(raw: &[u8], format: Option<Format>) -> Result<Vec<String>> {
    match format.unwrap_or(Format::Auto) {
        Format::Auto => {
            if let Ok(lines) = share_lines(raw) {
                if !lines.is_empty() && lines.iter().all(|l| codec::decode_share(l).is_ok()) {
                    return Ok(lines);
                }
            }
            share_lines(&Format::Auto.decode(raw)?)
        }
        explicit => share_lines(&explicit.decode(raw)?),
    }
}

fn share_lines(text: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(text)
        .map_err(|_| SclError::Format("share file is not valid text".into()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn sample_shares() -> Vec<String> {
        shamir::generate(b"hunter2", 2, 3).unwrap()
    }

    #[test]
    fn raw_share_lines_are_used_directly() {
        let shares = sample_shares();
        let file = format!("{}\r\n\n{}\n", shares[0], shares[2]);
        let parsed = parse_share_file(file.as_bytes(), None).unwrap();
        assert_eq!(parsed, vec![shares[0].clone(), shares[2].clone()]);
    }

    #[test]
    fn base64_wrapped_share_file_is_detected() {
        let shares = sample_shares();
        let file = STANDARD.encode(shares.join("\n"));
        let parsed = parse_share_file(file.as_bytes(), None).unwrap();
        assert_eq!(parsed, shares);
    }

    #[test]
    fn explicit_hex_format() {
        let shares = sample_shares();
        let file = hex::encode(shares.join("\n"));
        let parsed = parse_share_file(file.as_bytes(), Some(Format::Hex)).unwrap();
        assert_eq!(parsed, shares);
    }

    #[test]
    fn blank_file_yields_no_shares() {
        assert!(parse_share_file(b"\n \n", Some(Format::Binary))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn non_utf8_share_file_is_rejected() {
        assert!(share_lines(&[0xff, 0xfe]).is_err());
    }
}
