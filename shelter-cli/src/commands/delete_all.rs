//! Delete-all command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, GlobalOptions};
use clap::Args;
use shelter::Filter;

/// Delete every pet.
#[derive(Args)]
pub struct DeleteAllCommand {}

impl DeleteAllCommand {
    /// Execute the delete-all command, printing the number of rows deleted.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;
        let rows = provider.delete("pets", &Filter::all())?;

        println!("{rows}");
        Ok(())
    }
}
