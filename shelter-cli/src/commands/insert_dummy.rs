//! Insert-dummy command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, GlobalOptions};
use clap::Args;
use shelter::{Gender, PetValues};

/// Insert the sample pet Toto.
#[derive(Args)]
pub struct InsertDummyCommand {}

impl InsertDummyCommand {
    /// Execute the insert-dummy command, printing the new item resource.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;

        let toto = PetValues::new()
            .name("Toto")
            .breed("Terrier")
            .gender(Gender::Male)
            .weight(7);
        let resource = provider.insert("pets", toto)?;

        println!("{resource}");
        Ok(())
    }
}
