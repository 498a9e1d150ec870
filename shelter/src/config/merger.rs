//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use shelter::config::{Config, ConfigMerger};
///
/// let low = Config { busy_timeout_ms: Some(100), ..Default::default() };
/// let high = Config { busy_timeout_ms: Some(900), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.busy_timeout_ms, Some(900));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations given from lowest to highest precedence.
    #[must_use]
    pub fn merge<I>(sources: I) -> Config
    where
        I: IntoIterator<Item = Config>,
    {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source);
        }
        result
    }

    /// Merge source config into target (source overwrites target if Some).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.busy_timeout_ms.is_some() {
            target.busy_timeout_ms = source.busy_timeout_ms;
        }

        if source.upgrade_policy.is_some() {
            target.upgrade_policy = source.upgrade_policy;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
