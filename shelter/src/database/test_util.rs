//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Gender, PetValues};

/// Creates a temporary file-backed test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// The sample pet inserted by the catalog's "insert dummy data" action.
#[must_use]
pub fn toto() -> PetValues {
    PetValues::new()
        .name("Toto")
        .breed("Terrier")
        .gender(Gender::Male)
        .weight(7)
}
