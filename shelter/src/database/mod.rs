//! Database layer for persistent storage of pets.
//!
//! This module provides the SQLite-based record store: the static schema of
//! the `pets` table, connection management, schema versioning, typed
//! filters, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use shelter::database::{Database, DatabaseConfig, Filter};
//! use shelter::PetValues;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/shelter.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Insert a pet
//! let id = db.insert_pet(&PetValues::new().name("Toto")).unwrap();
//!
//! // List all pets
//! for pet in Database::query_pets(db.connection(), &Filter::all(), None).unwrap() {
//!     println!("{pet:?}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod query;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, UpgradePolicy,
    DATABASE_FILE_NAME,
};
pub use connection::Database;
pub use query::{Comparison, Condition, Filter, SortDirection, SortOrder};
pub use schema::{Column, ColumnType, CURRENT_SCHEMA_VERSION, TABLE_NAME};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
