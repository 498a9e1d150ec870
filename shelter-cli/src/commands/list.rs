//! List command implementation.
//!
//! This module implements the `list` command, which displays pets in
//! various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_provider, parse_gender_code, print_pets, GlobalOptions};
use clap::Args;
use shelter::database::Comparison;
use shelter::output::OutputFormat;
use shelter::{Column, Filter, SortOrder};

/// List pets.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (default: from configuration, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Filter by exact name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Filter by exact breed
    #[arg(long, value_name = "BREED")]
    pub breed: Option<String>,

    /// Filter by gender (unknown, male, female or 0-2)
    #[arg(long, value_name = "GENDER")]
    pub gender: Option<String>,

    /// Only pets weighing at least this much
    #[arg(long, value_name = "WEIGHT")]
    pub min_weight: Option<u32>,

    /// Only pets weighing at most this much
    #[arg(long, value_name = "WEIGHT")]
    pub max_weight: Option<u32>,

    /// Sort by column
    #[arg(long, value_enum, value_name = "COLUMN")]
    pub sort: Option<Column>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let filter = self.filter()?;
        let sort = self.sort.map(|column| {
            if self.desc {
                SortOrder::desc(column)
            } else {
                SortOrder::asc(column)
            }
        });

        let provider = open_provider(global, &config)?;
        let pets = provider.query("pets", &filter, sort)?;

        print_pets(self.format.unwrap_or(config.output_format()), pets.as_slice())
    }

    fn filter(&self) -> Result<Filter, CliError> {
        if let (Some(min), Some(max)) = (self.min_weight, self.max_weight) {
            if min > max {
                return Err(CliError::InvalidArguments(format!(
                    "--min-weight {min} is greater than --max-weight {max}"
                )));
            }
        }

        let mut filter = Filter::all();
        if let Some(ref name) = self.name {
            filter = filter.eq(Column::Name, name.clone());
        }
        if let Some(ref breed) = self.breed {
            filter = filter.eq(Column::Breed, breed.clone());
        }
        if let Some(ref gender) = self.gender {
            filter = filter.eq(Column::Gender, parse_gender_code(gender)?);
        }
        if let Some(min) = self.min_weight {
            filter = filter.and(Column::Weight, Comparison::Ge, min);
        }
        if let Some(max) = self.max_weight {
            filter = filter.and(Column::Weight, Comparison::Le, max);
        }
        Ok(filter)
    }
}
