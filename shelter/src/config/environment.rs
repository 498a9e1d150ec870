//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SHELTER_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use shelter::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(ms) = env::var("SHELTER_BUSY_TIMEOUT_MS") {
            config.busy_timeout_ms = Some(ms.trim().parse().map_err(|_| Error::Validation {
                field: "SHELTER_BUSY_TIMEOUT_MS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(policy) = env::var("SHELTER_UPGRADE_POLICY") {
            config.upgrade_policy = Some(policy.parse()?);
        }

        if let Ok(format) = env::var("SHELTER_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse()?);
        }

        if let Ok(val) = env::var("SHELTER_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("SHELTER_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a recognized boolean.
    pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::UpgradePolicy;
    use crate::output::OutputFormat;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "SHELTER_BUSY_TIMEOUT_MS",
        "SHELTER_UPGRADE_POLICY",
        "SHELTER_OUTPUT_FORMAT",
        "SHELTER_DISABLE_AUTOINIT",
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == "test"));
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_all_overrides_applied() {
        with_env(
            &[
                ("SHELTER_BUSY_TIMEOUT_MS", "1500"),
                ("SHELTER_UPGRADE_POLICY", "refuse"),
                ("SHELTER_OUTPUT_FORMAT", "csv"),
                ("SHELTER_DISABLE_AUTOINIT", "yes"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.busy_timeout_ms, Some(1500));
                assert_eq!(config.upgrade_policy, Some(UpgradePolicy::Refuse));
                assert_eq!(config.output_format, Some(OutputFormat::Csv));
                assert_eq!(config.disable_autoinit, Some(true));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_rejected() {
        with_env(&[("SHELTER_BUSY_TIMEOUT_MS", "soon")], || {
            let mut config = Config::default();
            let result = EnvironmentConfig::apply_overrides(&mut config);
            assert!(matches!(result, Err(Error::Validation { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_policy_rejected() {
        with_env(&[("SHELTER_UPGRADE_POLICY", "migrate")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }
}
