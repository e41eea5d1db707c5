//! `scl version`: display version and engine parameters.

use console::style;

use crate::errors::Result;
use crate::shamir::{chunker, field};

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("scl {current}");
    println!(
        "{}",
        style(format!(
            "shamir: {}-bit prime field, {}-byte chunks",
            field::prime().bits(),
            chunker::CHUNK_BYTES
        ))
        .dim()
    );
    Ok(())
}
