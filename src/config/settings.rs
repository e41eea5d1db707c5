use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::DigestAlgorithm;
use crate::errors::{Result, SclError};
use crate::formats::Format;
use crate::logging::LogFormat;

/// Project-level configuration, loaded from `.scl.toml`.
///
/// Every field has a sensible default so scl works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Encoding for written artifacts. Unset means each command's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    /// Encoding expected when reading keys, signatures and shares back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,

    /// Base name for `sss generate` output when `-o` is not given.
    #[serde(default = "default_share_file")]
    pub share_file: String,

    /// Hash algorithm for `digest` commands.
    #[serde(default = "default_digest")]
    pub digest: String,

    /// Diagnostic log format: "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_share_file() -> String {
    "secret-shares".to_string()
}

fn default_digest() -> String {
    "sha256".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: None,
            input_format: None,
            share_file: default_share_file(),
            digest: default_digest(),
            log_format: default_log_format(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".scl.toml";

    /// Load settings from `<project_dir>/.scl.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SclError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Configured output format, if any.
    pub fn output_format(&self) -> Result<Option<Format>> {
        self.output_format.as_deref().map(Format::from_name).transpose()
    }

    /// Configured input format, if any.
    pub fn input_format(&self) -> Result<Option<Format>> {
        self.input_format.as_deref().map(Format::from_name).transpose()
    }

    pub fn digest_algorithm(&self) -> Result<DigestAlgorithm> {
        self.digest.parse()
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_str_lossy(&self.log_format)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
