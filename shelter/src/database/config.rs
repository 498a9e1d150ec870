//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and the schema upgrade policy.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "shelter.db";

/// What to do when the on-disk schema is older than this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradePolicy {
    /// Drop the `pets` table and recreate it. Stored pets are lost.
    #[default]
    Recreate,
    /// Refuse to open the database.
    Refuse,
}

impl FromStr for UpgradePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "recreate" => Ok(Self::Recreate),
            "refuse" => Ok(Self::Refuse),
            _ => Err(Error::Validation {
                field: "upgrade_policy".into(),
                message: format!("expected 'recreate' or 'refuse', got '{s}'"),
            }),
        }
    }
}

impl fmt::Display for UpgradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recreate => write!(f, "recreate"),
            Self::Refuse => write!(f, "refuse"),
        }
    }
}

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use shelter::database::{DatabaseConfig, UpgradePolicy};
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/shelter.db")
///     .with_busy_timeout(Duration::from_millis(10000))
///     .with_upgrade_policy(UpgradePolicy::Refuse);
/// assert_eq!(config.upgrade_policy, UpgradePolicy::Refuse);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
    /// Behavior when the stored schema version is older than the current one.
    pub upgrade_policy: UpgradePolicy,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    /// - `upgrade_policy`: recreate
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
            upgrade_policy: UpgradePolicy::default(),
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the schema upgrade policy.
    #[must_use]
    pub fn with_upgrade_policy(mut self, policy: UpgradePolicy) -> Self {
        self.upgrade_policy = policy;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.shelter`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".shelter"))
}

/// Resolves the data directory from `SHELTER_DATA_DIR` or the default.
///
/// # Errors
///
/// Returns an error if `SHELTER_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var("SHELTER_DATA_DIR") {
        Ok(data_dir) => Ok(PathBuf::from(data_dir)),
        Err(_) => default_data_dir(),
    }
}

/// Resolves the database path.
///
/// The resolution order is:
/// 1. `$SHELTER_DATA_DIR/shelter.db` if `SHELTER_DATA_DIR` is set
/// 2. `~/.shelter/shelter.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SHELTER_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}
