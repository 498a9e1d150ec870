//! Shared database test utilities.

use std::path::{Path, PathBuf};

use shelter::database::{DatabaseConfig, DATABASE_FILE_NAME};
use shelter::PetProvider;
use tempfile::TempDir;

/// Creates a file-backed provider in a fresh temporary directory.
///
/// The directory lives as long as the returned `TempDir`.
#[allow(dead_code)]
pub fn create_test_provider() -> (TempDir, PetProvider) {
    let dir = tempfile::tempdir().unwrap();
    let provider = PetProvider::open(DatabaseConfig::new(database_path(dir.path()))).unwrap();
    (dir, provider)
}

/// Returns the database path inside `data_dir`.
#[allow(dead_code)]
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILE_NAME)
}

/// Overwrites the stored schema version of the database at `path`.
#[allow(dead_code)]
pub fn set_schema_version(path: &Path, version: i32) {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn.execute(
        "UPDATE metadata SET value = ?1 WHERE key = 'schema_version'",
        [version.to_string()],
    )
    .unwrap();
}
