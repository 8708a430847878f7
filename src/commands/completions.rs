//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use pkgdata::error::{PkgDataError, Result};

use crate::cli::CompletionsArgs;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = match args.shell.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "elvish" => Shell::Elvish,
        "fish" => Shell::Fish,
        "powershell" | "pwsh" => Shell::PowerShell,
        "zsh" => Shell::Zsh,
        _ => {
            return Err(PkgDataError::IoError {
                message: format!(
                    "Unknown shell: {} (supported: bash, elvish, fish, powershell, zsh)",
                    args.shell
                ),
            });
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "pkgdata", &mut std::io::stdout().lock());

    Ok(())
}
