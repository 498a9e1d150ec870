//! Get command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, print_pets, GlobalOptions};
use clap::Args;
use shelter::output::OutputFormat;

/// Show one pet.
#[derive(Args)]
pub struct GetCommand {
    /// Item resource (`pets/{id}`)
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Output format (default: from configuration, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl GetCommand {
    /// Execute the get command.
    ///
    /// A resource with no pet is a semantic failure (exit code 1).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;

        let pet = provider
            .get(&self.resource)?
            .ok_or_else(|| CliError::SemanticFailure(format!("No pet at {}", self.resource)))?;

        print_pets(self.format.unwrap_or(config.output_format()), &[pet])
    }
}
