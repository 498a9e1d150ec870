//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound for the busy timeout: one hour.
pub const MAX_BUSY_TIMEOUT_MS: u64 = 3_600_000;

/// Validates merged configuration values.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the busy timeout is zero or above one hour.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ms) = config.busy_timeout_ms {
            if ms == 0 {
                return Err(Error::Validation {
                    field: "busy_timeout_ms".into(),
                    message: "Must be greater than zero".into(),
                });
            }
            if ms > MAX_BUSY_TIMEOUT_MS {
                return Err(Error::Validation {
                    field: "busy_timeout_ms".into(),
                    message: format!("Must be at most {MAX_BUSY_TIMEOUT_MS}"),
                });
            }
        }
        Ok(())
    }
}
