//! Database connection management.
//!
//! This module provides the main database handle with proper initialization
//! and PRAGMA settings for durable single-writer `SQLite` access.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;
use super::migrations::check_schema_compatibility;

/// The handle to the pets database.
///
/// # Examples
///
/// ```no_run
/// use shelter::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/shelter.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: Option<DatabaseConfig>,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode and full synchronous commits
    /// - Configure busy timeout
    /// - Initialize, verify or upgrade the database schema
    ///
    /// Opening is idempotent: reopening an up-to-date database changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file is missing and `auto_create` is disabled
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - The schema is unsupported or cannot be initialized
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if !config.auto_create {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("database not found: {}", config.path.display()),
                )));
            }
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        // Installed before any statement runs, the journal mode switch included
        conn.busy_timeout(config.busy_timeout)?;

        // PRAGMA journal_mode returns a row; read-only handles keep the file's mode
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        }
        // Every commit reaches disk before the call returns
        conn.execute_batch("PRAGMA synchronous = FULL")?;

        check_schema_compatibility(&conn, config.upgrade_policy, config.read_only)?;

        log::debug!("opened pets database at {}", config.path.display());

        Ok(Self {
            conn,
            config: Some(config),
        })
    }

    /// Opens a private in-memory database with a fresh schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelter::database::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// assert!(db.config().is_none());
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        check_schema_compatibility(&conn, super::UpgradePolicy::Recreate, false)?;
        Ok(Self { conn, config: None })
    }

    /// Returns the configuration the database was opened with, if file-backed.
    #[must_use]
    pub const fn config(&self) -> Option<&DatabaseConfig> {
        self.config.as_ref()
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
