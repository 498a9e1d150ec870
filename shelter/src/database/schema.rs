//! Database schema definitions and SQL constants.
//!
//! This module contains the static description of the `pets` table: its
//! name, ordered columns, column types, and the SQL used to create it and to
//! track the schema version.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Current schema version for the database.
///
/// This version is stored in the metadata table. A database carrying an
/// older version has its `pets` table dropped and recreated on open.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Name of the single record table.
pub const TABLE_NAME: &str = "pets";

/// A column of the `pets` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Column {
    /// Store-assigned identifier.
    Id,
    /// Pet name.
    Name,
    /// Optional breed.
    Breed,
    /// Gender code.
    Gender,
    /// Weight.
    Weight,
}

/// Storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integer.
    Integer,
    /// UTF-8 text.
    Text,
}

impl Column {
    /// All columns, in table order.
    pub const ALL: [Self; 5] = [Self::Id, Self::Name, Self::Breed, Self::Gender, Self::Weight];

    /// Returns the SQL column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::Name => "name",
            Self::Breed => "breed",
            Self::Gender => "gender",
            Self::Weight => "weight",
        }
    }

    /// Returns the storage class of the column.
    #[must_use]
    pub const fn sql_type(self) -> ColumnType {
        match self {
            Self::Name | Self::Breed => ColumnType::Text,
            Self::Id | Self::Gender | Self::Weight => ColumnType::Integer,
        }
    }

    /// Returns true if the column accepts NULL.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Breed)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = Error;

    /// Accepts either the SQL column name or its short form (`id`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted || (wanted == "id" && *c == Self::Id))
            .ok_or_else(|| Error::invalid_argument(format!("unknown column '{s}'")))
    }
}

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs, including the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the pets table.
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub const CREATE_PETS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS pets (
        _id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        breed TEXT,
        gender INTEGER NOT NULL,
        weight INTEGER NOT NULL DEFAULT 0
    )";

/// SQL statement to drop the pets table.
pub const DROP_PETS_TABLE: &str = "DROP TABLE IF EXISTS pets";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a pet.
pub const INSERT_PET: &str = r"
    INSERT INTO pets (name, breed, gender, weight)
    VALUES (?, ?, ?, ?)
";

/// Column list used by every pet query, in [`Column::ALL`] order.
pub const SELECT_PET_COLUMNS: &str = "SELECT _id, name, breed, gender, weight FROM pets";
