//! Formatter implementations for pet listings.

use std::io;

use crate::pet::Pet;
use crate::Result;

use super::{OutputFormatter, COLUMN_HEADERS};

/// Human-readable table: uppercase header, one tab-separated line per pet.
///
/// Missing breeds are shown as `-`.
///
/// # Examples
///
/// ```
/// use shelter::output::{OutputFormatter, TableFormatter};
/// use shelter::{Gender, Pet};
///
/// let pets = vec![Pet { id: 1, name: "Toto".into(), breed: None, gender: Gender::Male, weight: 7 }];
/// let output = TableFormatter.format(&pets).unwrap();
/// assert_eq!(output, "ID\tNAME\tBREED\tGENDER\tWEIGHT\n1\tToto\t-\tmale\t7\n");
/// ```
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format(&self, pets: &[Pet]) -> Result<String> {
        let mut output = COLUMN_HEADERS
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join("\t");
        output.push('\n');

        for pet in pets {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                pet.id,
                pet.name,
                pet.breed.as_deref().unwrap_or("-"),
                pet.gender,
                pet.weight,
            ));
        }

        Ok(output)
    }
}

/// Pretty-printed JSON array of pet objects.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, pets: &[Pet]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(pets).map_err(io::Error::from)?;
        output.push('\n');
        Ok(output)
    }
}

/// Delimited output (CSV or TSV) with a lowercase header row.
///
/// Missing breeds are empty fields.
pub struct DelimitedFormatter {
    delimiter: u8,
}

impl DelimitedFormatter {
    /// Creates a formatter using `delimiter` between fields.
    #[must_use]
    pub const fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl OutputFormatter for DelimitedFormatter {
    fn format(&self, pets: &[Pet]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(COLUMN_HEADERS).map_err(io::Error::from)?;
        for pet in pets {
            writer
                .write_record([
                    pet.id.to_string(),
                    pet.name.clone(),
                    pet.breed.clone().unwrap_or_default(),
                    pet.gender.to_string(),
                    pet.weight.to_string(),
                ])
                .map_err(io::Error::from)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::Gender;

    fn sample() -> Vec<Pet> {
        vec![
            Pet {
                id: 1,
                name: "Toto".into(),
                breed: Some("Terrier".into()),
                gender: Gender::Male,
                weight: 7,
            },
            Pet {
                id: 2,
                name: "Luna, Jr.".into(),
                breed: None,
                gender: Gender::Female,
                weight: 3,
            },
        ]
    }

    #[test]
    fn test_table_format() {
        let output = TableFormatter.format(&sample()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "ID\tNAME\tBREED\tGENDER\tWEIGHT");
        assert_eq!(lines[1], "1\tToto\tTerrier\tmale\t7");
        assert_eq!(lines[2], "2\tLuna, Jr.\t-\tfemale\t3");
    }

    #[test]
    fn test_table_empty_has_header_only() {
        let output = TableFormatter.format(&[]).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "Toto");
        assert_eq!(value[0]["gender"], "male");
        assert!(value[1]["breed"].is_null());
    }

    #[test]
    fn test_csv_quotes_commas() {
        let output = DelimitedFormatter::new(b',').format(&sample()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "id,name,breed,gender,weight");
        assert_eq!(lines[1], "1,Toto,Terrier,male,7");
        assert_eq!(lines[2], "2,\"Luna, Jr.\",,female,3");
    }

    #[test]
    fn test_tsv_format() {
        let output = OutputFormat::Tsv.create_formatter().format(&sample()).unwrap();
        assert!(output.starts_with("id\tname\tbreed\tgender\tweight\n"));
        assert!(output.contains("2\tLuna, Jr.\t\tfemale\t3"));
    }
}
