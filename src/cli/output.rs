//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::crypto::aes::CipherInfo;
use crate::crypto::DigestAlgorithm;

/// Print a green success message: "check_mark {msg}"
///
/// Goes to stderr: stdout may be carrying shares or a recovered secret.
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of hash algorithms (Name, Digest bytes).
pub fn print_digest_table(algorithms: &[DigestAlgorithm]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Digest bytes"]);

    for alg in algorithms {
        table.add_row(vec![alg.name().to_string(), alg.output_len().to_string()]);
    }

    println!("{table}");
}

/// Print a table of ciphers (Name, Key bits, Nonce bytes).
pub fn print_cipher_table(ciphers: &[CipherInfo]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Key bits", "Nonce bytes"]);

    for c in ciphers {
        table.add_row(vec![
            c.name.to_string(),
            c.key_bits.to_string(),
            c.nonce_bytes.to_string(),
        ]);
    }

    println!("{table}");
}
