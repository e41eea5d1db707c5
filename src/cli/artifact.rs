//! Writing command results to stdout or files.
//!
//! A command produces one or more artifacts (shares, a signature, a
//! generated key, ...). With no `-o` they go to stdout separated by a
//! blank line. With `-o BASE` each lands in `BASE<suffix>`.

use std::io::Write;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::errors::{Result, SclError};
use crate::formats::Format;

/// One piece of command output.
pub struct Artifact {
    content: Zeroizing<Vec<u8>>,
    suffix: &'static str,
}

impl Artifact {
    pub fn new(content: impl Into<Vec<u8>>, suffix: &'static str) -> Self {
        Self {
            content: Zeroizing::new(content.into()),
            suffix,
        }
    }

    /// Path for this artifact under `base`.
    ///
    /// A base that already ends in the suffix is used as-is, so
    /// `-o shares.txt` does not become `shares.txt.txt`.
    pub fn path_for(&self, base: &str) -> PathBuf {
        let stem = base.strip_suffix(self.suffix).unwrap_or(base);
        PathBuf::from(format!("{stem}{}", self.suffix))
    }
}

/// Write `artifacts` encoded with `format`.
///
/// `default_base` applies when `-o` was not given; `None` (or a base of
/// `-`) means stdout.
pub fn emit(
    ctx: &Context,
    format: Format,
    default_base: Option<&str>,
    artifacts: &[Artifact],
) -> Result<()> {
    emit_with(ctx, format, default_base, artifacts, |path| {
        confirm_overwrite(ctx, path)
    })
}

/// [`emit`] with the overwrite question answered by `confirm`.
fn emit_with(
    ctx: &Context,
    format: Format,
    default_base: Option<&str>,
    artifacts: &[Artifact],
    mut confirm: impl FnMut(&Path) -> Result<bool>,
) -> Result<()> {
    let base = ctx
        .output_file
        .as_deref()
        .or(default_base)
        .filter(|b| *b != "-");

    match base {
        None => write_stdout(format, artifacts),
        Some(base) => {
            for artifact in artifacts {
                write_file(format, &artifact.path_for(base), artifact, &mut confirm)?;
            }
            Ok(())
        }
    }
}

fn write_stdout(format: Format, artifacts: &[Artifact]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    for (i, artifact) in artifacts.iter().enumerate() {
        if i > 0 {
            stdout.write_all(b"\n\n")?;
        }
        let encoded = Zeroizing::new(format.encode(&artifact.content));
        stdout.write_all(&encoded)?;
        // Raw bytes are written untouched; text encodings get a newline.
        if format != Format::Binary && !encoded.is_empty() && !encoded.ends_with(b"\n") {
            stdout.write_all(b"\n")?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn write_file(
    format: Format,
    path: &Path,
    artifact: &Artifact,
    confirm: &mut impl FnMut(&Path) -> Result<bool>,
) -> Result<()> {
    if path.exists() && !confirm(path)? {
        return Err(SclError::UserCancelled);
    }

    let encoded = Zeroizing::new(format.encode(&artifact.content));
    std::fs::write(path, encoded.as_slice())?;
    tracing::debug!(path = %path.display(), bytes = encoded.len(), "wrote artifact");

    output::success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn confirm_overwrite(ctx: &Context, path: &Path) -> Result<bool> {
    if ctx.assume_yes {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| SclError::CommandFailed(format!("confirmation prompt: {e}")))
}
