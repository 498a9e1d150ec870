//! Add command implementation.
//!
//! This module implements the `add` command, which inserts a pet and prints
//! the new item resource.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, parse_gender_code, GlobalOptions};
use clap::Args;
use shelter::PetValues;

/// Add a pet.
#[derive(Args)]
pub struct AddCommand {
    /// Name of the pet
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Breed of the pet
    #[arg(long, value_name = "BREED")]
    pub breed: Option<String>,

    /// Gender (unknown, male, female or 0-2)
    #[arg(long, value_name = "GENDER")]
    pub gender: Option<String>,

    /// Weight of the pet
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub weight: Option<i64>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut values = PetValues::new().name(self.name);
        if let Some(breed) = self.breed {
            values = values.breed(breed);
        }
        if let Some(ref gender) = self.gender {
            values = values.gender_code(parse_gender_code(gender)?);
        }
        if let Some(weight) = self.weight {
            values = values.weight(weight);
        }

        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;
        let resource = provider.insert("pets", values)?;

        println!("{resource}");
        Ok(())
    }
}
