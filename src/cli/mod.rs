//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod artifact;
pub mod commands;
pub mod output;

use std::io::Read;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::{rsa, DigestAlgorithm};
use crate::errors::{Result, SclError};
use crate::formats::Format;

/// scl CLI: secret sharing and cryptography toolkit.
#[derive(Parser)]
#[command(
    name = "scl",
    about = "Secret sharing and cryptography toolkit",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base path for written files ("-" for stdout)
    #[arg(short, long, global = true)]
    pub output_file: Option<String>,

    /// Encoding for output: auto, base64, hex, binary
    #[arg(long, global = true, env = "SCL_OUTPUT_FORMAT")]
    pub output_format: Option<String>,

    /// Encoding of keys, signatures and share files being read
    #[arg(long, global = true, env = "SCL_INPUT_FORMAT")]
    pub input_format: Option<String>,

    /// Overwrite existing files without asking
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Threshold secret sharing (Shamir)
    Sss {
        #[command(subcommand)]
        action: SssAction,
    },

    /// Hash and HMAC files
    Digest {
        #[command(subcommand)]
        action: DigestAction,
    },

    /// Encrypt and decrypt files with AES-256-GCM
    Aes {
        #[command(subcommand)]
        action: AesAction,
    },

    /// Generate RSA key pairs, sign and verify files
    Rsa {
        #[command(subcommand)]
        action: RsaAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },

    /// Show version information
    Version,
}

/// Secret sharing subcommands.
#[derive(clap::Subcommand)]
pub enum SssAction {
    /// Split a secret file into shares (one per line)
    ///
    /// Large secrets are split into 32-byte blocks, so shares grow with the
    /// secret. To share something big, encrypt it with `scl aes encrypt`
    /// and share the key instead.
    Generate {
        /// File holding the secret ("-" for stdin)
        input: String,
        /// Shares required to recover the secret
        #[arg(short = 'm', long, value_name = "N")]
        min_shares: usize,
        /// Shares to generate
        #[arg(short = 'n', long, value_name = "N")]
        num_shares: usize,
    },

    /// Recover a secret from a file of shares (one per line)
    ///
    /// Too few shares, or shares from different secrets, do NOT produce an
    /// error: the output is simply wrong.
    Combine {
        /// File holding the shares ("-" for stdin)
        input: String,
    },
}

/// Digest subcommands.
#[derive(clap::Subcommand)]
pub enum DigestAction {
    /// Write the digest of a file
    Sign {
        /// File to sign ("-" for stdin)
        input: String,
        /// Hash algorithm (default: sha256)
        #[arg(short, long)]
        digest: Option<String>,
    },

    /// Check a file against a digest (exit status 1 on mismatch)
    Verify {
        /// File to verify
        input: String,
        /// Signature file written by `digest sign`
        signature: String,
        /// Hash algorithm (default: sha256)
        #[arg(short, long)]
        digest: Option<String>,
    },

    /// Write an HMAC of a file, generating a key unless one is given
    Hmac {
        /// File to sign ("-" for stdin)
        input: String,
        /// Existing HMAC key file
        #[arg(short, long)]
        key_path: Option<String>,
        /// Hash algorithm (default: sha256)
        #[arg(short, long)]
        digest: Option<String>,
    },

    /// Check a file against an HMAC (exit status 1 on mismatch)
    HmacVerify {
        /// File to verify
        input: String,
        /// Signature file written by `digest hmac`
        signature: String,
        /// HMAC key file
        #[arg(short, long)]
        key_path: String,
        /// Hash algorithm (default: sha256)
        #[arg(short, long)]
        digest: Option<String>,
    },

    /// List supported hash algorithms
    List,
}

/// AES subcommands.
#[derive(clap::Subcommand)]
pub enum AesAction {
    /// Encrypt a file, generating a key unless one is given
    Encrypt {
        /// File to encrypt ("-" for stdin)
        input: String,
        /// Existing key file
        #[arg(short, long)]
        key_path: Option<String>,
    },

    /// Decrypt a file written by `aes encrypt`
    Decrypt {
        /// Encrypted file
        input: String,
        /// Key file
        #[arg(short, long)]
        key_path: String,
    },

    /// List supported ciphers
    Ciphers,
}

/// RSA subcommands.
#[derive(clap::Subcommand)]
pub enum RsaAction {
    /// Generate a key pair (<base>.pub and <base>.priv)
    Generate {
        /// Modulus size in bits
        #[arg(short = 's', long, default_value_t = rsa::DEFAULT_KEY_BITS)]
        key_size: usize,
    },

    /// Sign a file with SHA-256 (writes <file>.sig)
    Sign {
        /// File to sign ("-" for stdin)
        input: String,
        /// Private key file
        #[arg(short = 'Z', long = "priv-key")]
        priv_key: String,
    },

    /// Verify a signature with either half of the key pair
    Verify {
        /// File that was signed
        input: String,
        /// Signature file
        signature: String,
        /// Public key file
        #[arg(
            short = 'p',
            long = "pub-key",
            required_unless_present = "priv_key",
            conflicts_with = "priv_key"
        )]
        pub_key: Option<String>,
        /// Private key file
        #[arg(short = 'Z', long = "priv-key")]
        priv_key: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Settings and global flags resolved for one invocation.
///
/// Flags win over `.scl.toml`; each command supplies its own fallback
/// format when neither sets one.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub output_file: Option<String>,
    pub assume_yes: bool,
    output_format: Option<Format>,
    input_format: Option<Format>,
}

impl Context {
    /// Resolve flags against the settings in the current directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        Self::with_settings(cli, settings)
    }

    pub fn with_settings(cli: &Cli, settings: Settings) -> Result<Self> {
        let output_format = match cli.output_format.as_deref() {
            Some(name) => Some(Format::from_name(name)?),
            None => settings.output_format()?,
        };
        let input_format = match cli.input_format.as_deref() {
            Some(name) => Some(Format::from_name(name)?),
            None => settings.input_format()?,
        };

        Ok(Self {
            settings,
            output_file: cli.output_file.clone(),
            assume_yes: cli.yes,
            output_format,
            input_format,
        })
    }

    pub fn output_format_or(&self, fallback: Format) -> Format {
        self.output_format.unwrap_or(fallback)
    }

    pub fn input_format_or(&self, fallback: Format) -> Format {
        self.input_format.unwrap_or(fallback)
    }

    /// Input format only if one was configured.
    pub fn input_format(&self) -> Option<Format> {
        self.input_format
    }

    /// Digest named by a `-d` flag, falling back to the configured one.
    pub fn digest(&self, flag: Option<&str>) -> Result<DigestAlgorithm> {
        match flag {
            Some(name) => name.parse(),
            None => self.settings.digest_algorithm(),
        }
    }
}

/// Read a file, or stdin when `path` is `-`.
///
/// `what` names the file in error messages (e.g. "secret", "signature").
pub fn read_input(path: &str, what: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut data = Zeroizing::new(Vec::new());

    if path == "-" {
        std::io::stdin()
            .read_to_end(&mut data)
            .map_err(|e| SclError::CommandFailed(format!("cannot read {what} from stdin: {e}")))?;
        return Ok(data);
    }

    let mut file = std::fs::File::open(path)
        .map_err(|e| SclError::CommandFailed(format!("cannot open {what} '{path}': {e}")))?;
    file.read_to_end(&mut data)
        .map_err(|e| SclError::CommandFailed(format!("cannot read {what} '{path}': {e}")))?;
    Ok(data)
}

/// Read a key or signature file and decode it with the input format.
pub fn read_encoded(
    ctx: &Context,
    path: &str,
    what: &str,
    fallback: Format,
) -> Result<Zeroizing<Vec<u8>>> {
    let raw = read_input(path, what)?;
    let decoded = ctx.input_format_or(fallback).decode(&raw)?;
    Ok(Zeroizing::new(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn parses_sss_generate() {
        let cli = parse(&["scl", "sss", "generate", "secret.txt", "-m", "3", "-n", "5"]);
        match cli.command {
            Commands::Sss {
                action:
                    SssAction::Generate {
                        input,
                        min_shares,
                        num_shares,
                    },
            } => {
                assert_eq!(input, "secret.txt");
                assert_eq!(min_shares, 3);
                assert_eq!(num_shares, 5);
            }
            _ => panic!("expected sss generate"),
        }
    }

    #[test]
    fn negative_share_counts_are_rejected() {
        assert!(Cli::try_parse_from(["scl", "sss", "generate", "f", "-m", "-3", "-n", "5"]).is_err());
    }

    #[test]
    fn hmac_verify_requires_key() {
        assert!(Cli::try_parse_from(["scl", "digest", "hmac-verify", "f", "sig"]).is_err());
    }

    #[test]
    fn parses_rsa_commands() {
        let cli = parse(&["scl", "rsa", "generate"]);
        assert!(matches!(
            cli.command,
            Commands::Rsa {
                action: RsaAction::Generate {
                    key_size: rsa::DEFAULT_KEY_BITS
                }
            }
        ));

        let cli = parse(&["scl", "rsa", "verify", "f", "f.sig", "-Z", "k.priv"]);
        match cli.command {
            Commands::Rsa {
                action:
                    RsaAction::Verify {
                        pub_key, priv_key, ..
                    },
            } => {
                assert_eq!(pub_key, None);
                assert_eq!(priv_key.as_deref(), Some("k.priv"));
            }
            _ => panic!("expected rsa verify"),
        }
    }

    #[test]
    fn rsa_verify_needs_exactly_one_key() {
        assert!(Cli::try_parse_from(["scl", "rsa", "verify", "f", "sig"]).is_err());
        assert!(Cli::try_parse_from([
            "scl", "rsa", "verify", "f", "sig", "-p", "k.pub", "-Z", "k.priv"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["scl", "rsa", "sign", "f"]).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let cli = parse(&["scl", "--output-format", "hex", "version"]);
        let settings = Settings {
            output_format: Some("base64".into()),
            input_format: Some("base64".into()),
            ..Settings::default()
        };
        let ctx = Context::with_settings(&cli, settings).unwrap();
        assert_eq!(ctx.output_format_or(Format::Auto), Format::Hex);
        assert_eq!(ctx.input_format_or(Format::Auto), Format::Base64);
    }

    #[test]
    fn command_fallback_applies_when_unset() {
        let cli = parse(&["scl", "version"]);
        let ctx = Context::with_settings(&cli, Settings::default()).unwrap();
        assert_eq!(ctx.output_format_or(Format::Hex), Format::Hex);
        assert_eq!(ctx.input_format(), None);
        assert_eq!(ctx.digest(None).unwrap(), DigestAlgorithm::Sha256);
        assert_eq!(ctx.digest(Some("sha384")).unwrap(), DigestAlgorithm::Sha384);
    }

    #[test]
    fn unknown_format_flag_fails() {
        let cli = parse(&["scl", "--output-format", "words", "version"]);
        assert!(Context::with_settings(&cli, Settings::default()).is_err());
    }

    #[test]
    fn read_input_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = read_input(missing.to_str().unwrap(), "secret").unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn read_encoded_uses_fallback_format() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("key.hex");
        std::fs::write(&path, "00ff\n").unwrap();

        let cli = parse(&["scl", "version"]);
        let ctx = Context::with_settings(&cli, Settings::default()).unwrap();
        let key = read_encoded(&ctx, path.to_str().unwrap(), "key", Format::Hex).unwrap();
        assert_eq!(key.as_slice(), &[0x00, 0xff]);
    }
}
