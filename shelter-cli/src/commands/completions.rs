//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "shelter";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; a hint on installing it goes to stderr.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable completions: {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(shelter completions bash)\" in ~/.bashrc"),
        Shell::Zsh => Some("shelter completions zsh > ~/.zsh/completions/_shelter"),
        Shell::Fish => Some("shelter completions fish | source"),
        Shell::PowerShell => {
            Some("shelter completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
