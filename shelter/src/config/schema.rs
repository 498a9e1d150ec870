//! Configuration schema definitions.
//!
//! This module defines the settings that can be read from `config.yaml` in
//! the data directory.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseConfig, UpgradePolicy};
use crate::output::OutputFormat;

/// Default busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered: a value left
/// as `None` falls through to the next source down.
///
/// # Examples
///
/// ```
/// use shelter::config::Config;
/// use shelter::database::UpgradePolicy;
///
/// let config = Config {
///     upgrade_policy: Some(UpgradePolicy::Refuse),
///     ..Default::default()
/// };
/// assert_eq!(config.upgrade_policy(), UpgradePolicy::Refuse);
/// assert_eq!(config.busy_timeout_ms(), 5000);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long to wait for the store lock, in milliseconds.
    pub busy_timeout_ms: Option<u64>,

    /// What to do with a database written by an older schema version.
    pub upgrade_policy: Option<UpgradePolicy>,

    /// Default output format for listings.
    pub output_format: Option<OutputFormat>,

    /// Refuse to create a missing database.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Returns the configuration with every built-in default filled in.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            busy_timeout_ms: Some(DEFAULT_BUSY_TIMEOUT_MS),
            upgrade_policy: Some(UpgradePolicy::default()),
            output_format: Some(OutputFormat::default()),
            disable_autoinit: Some(false),
        }
    }

    /// Busy timeout in milliseconds, or the default.
    #[must_use]
    pub fn busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Upgrade policy, or the default.
    #[must_use]
    pub fn upgrade_policy(&self) -> UpgradePolicy {
        self.upgrade_policy.unwrap_or_default()
    }

    /// Output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether automatic database creation is disabled.
    #[must_use]
    pub fn disable_autoinit(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// Applies the store settings of this configuration to `db`.
    #[must_use]
    pub fn apply_to(&self, mut db: DatabaseConfig) -> DatabaseConfig {
        db = db
            .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms()))
            .with_upgrade_policy(self.upgrade_policy());
        if self.disable_autoinit() {
            db = db.without_auto_create();
        }
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
busy_timeout_ms: 250
upgrade_policy: refuse
output_format: json
disable_autoinit: true
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.busy_timeout_ms, Some(250));
        assert_eq!(config.upgrade_policy, Some(UpgradePolicy::Refuse));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.disable_autoinit, Some(true));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_accessor_defaults() {
        let config = Config::default();
        assert_eq!(config.busy_timeout_ms(), DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.upgrade_policy(), UpgradePolicy::Recreate);
        assert_eq!(config.output_format(), OutputFormat::Table);
        assert!(!config.disable_autoinit());
    }

    #[test]
    fn test_apply_to_database_config() {
        let config = Config {
            busy_timeout_ms: Some(100),
            upgrade_policy: Some(UpgradePolicy::Refuse),
            disable_autoinit: Some(true),
            ..Default::default()
        };

        let db = config.apply_to(DatabaseConfig::new("/tmp/shelter.db"));
        assert_eq!(db.busy_timeout, Duration::from_millis(100));
        assert_eq!(db.upgrade_policy, UpgradePolicy::Refuse);
        assert!(!db.auto_create);
    }
}
