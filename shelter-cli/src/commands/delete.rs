//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, GlobalOptions};
use clap::Args;
use shelter::{Filter, Resource};

/// Delete one pet, or every pet with `--all`.
#[derive(Args)]
pub struct DeleteCommand {
    /// Resource to delete (`pets/{id}`, or `pets` together with `--all`)
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Confirm deleting the whole collection
    #[arg(long)]
    pub all: bool,
}

impl DeleteCommand {
    /// Execute the delete command, printing the number of rows deleted.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resource = Resource::parse(&self.resource)?;
        if resource.is_collection() && !self.all {
            return Err(CliError::InvalidArguments(
                "Deleting the whole collection requires --all".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;
        let rows = provider.delete(&self.resource, &Filter::all())?;

        println!("{rows}");
        Ok(())
    }
}
