//! Update command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, parse_gender_code, GlobalOptions};
use clap::Args;
use shelter::{Filter, PetValues, Resource};

/// Update fields of one pet, or of every pet with `--all`.
#[derive(Args)]
pub struct UpdateCommand {
    /// Resource to update (`pets/{id}`, or `pets` together with `--all`)
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Confirm updating the whole collection
    #[arg(long)]
    pub all: bool,

    /// New name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New breed
    #[arg(long, value_name = "BREED", conflicts_with = "clear_breed")]
    pub breed: Option<String>,

    /// Remove the breed
    #[arg(long)]
    pub clear_breed: bool,

    /// New gender (unknown, male, female or 0-2)
    #[arg(long, value_name = "GENDER")]
    pub gender: Option<String>,

    /// New weight
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub weight: Option<i64>,
}

impl UpdateCommand {
    /// Execute the update command, printing the number of rows affected.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resource = Resource::parse(&self.resource)?;
        if resource.is_collection() && !self.all {
            return Err(CliError::InvalidArguments(
                "Updating the whole collection requires --all".to_string(),
            ));
        }

        let mut values = PetValues::new();
        if let Some(name) = self.name {
            values = values.name(name);
        }
        if let Some(breed) = self.breed {
            values = values.breed(breed);
        }
        if self.clear_breed {
            values = values.clear_breed();
        }
        if let Some(ref gender) = self.gender {
            values = values.gender_code(parse_gender_code(gender)?);
        }
        if let Some(weight) = self.weight {
            values = values.weight(weight);
        }

        let config = load_configuration(global)?;
        let provider = open_provider(global, &config)?;
        let rows = provider.update(&self.resource, values, &Filter::all())?;

        println!("{rows}");
        Ok(())
    }
}
