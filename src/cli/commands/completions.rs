//! `scl completions`: print a shell completion script.
//!
//!   scl completions bash > ~/.bash_completion.d/scl
//!   scl completions zsh > "${fpath[1]}/_scl"

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{Result, SclError};

/// Accepted shell names, aliases included.
const SHELLS: &[(&str, Shell)] = &[
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
    ("powershell", Shell::PowerShell),
    ("pwsh", Shell::PowerShell),
    ("elvish", Shell::Elvish),
];

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    let wanted = name.trim().to_lowercase();
    SHELLS
        .iter()
        .find(|(n, _)| *n == wanted)
        .map(|(_, shell)| *shell)
        .ok_or_else(|| {
            SclError::CommandFailed(format!(
                "unknown shell '{name}' (try bash, zsh, fish, powershell or elvish)"
            ))
        })
}
