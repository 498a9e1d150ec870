//! Logging infrastructure for the shelter library.
//!
//! The library emits records through the `log` facade. This module provides
//! a simple stderr backend for it with three verbosity levels, and
//! [`init_logger`] to install it.

use std::env;
use std::fmt;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use shelter::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelter::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the most verbose `log` level this level lets through.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A stderr logger for the `log` facade.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use shelter::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let metadata = log::Metadata::builder().level(log::Level::Info).build();
/// assert!(!logger.enabled(&metadata));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Resolves the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet; verbose wins if both are set)
/// 2. `SHELTER_LOG_MODE` environment variable
/// 3. Default (Normal)
#[must_use]
pub fn resolve_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var("SHELTER_LOG_MODE")
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs the stderr logger as the global `log` backend.
///
/// The level is resolved with [`resolve_log_level`]. Only the first call
/// installs a backend; later calls only adjust the global max level.
///
/// # Examples
///
/// ```
/// use shelter::{init_logger, LogLevel};
///
/// let level = init_logger(false, true);
/// assert_eq!(level, LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_log_level(verbose, quiet);
    let _ = log::set_boxed_logger(Box::new(Logger::new(level)));
    log::set_max_level(level.level_filter());
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn metadata(level: log::Level) -> log::Metadata<'static> {
        log::Metadata::builder().level(level).build()
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_enabled_by_level() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&metadata(log::Level::Error)));

        let normal = Logger::default();
        assert!(normal.enabled(&metadata(log::Level::Error)));
        assert!(normal.enabled(&metadata(log::Level::Warn)));
        assert!(!normal.enabled(&metadata(log::Level::Info)));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&metadata(log::Level::Debug)));
        assert!(!verbose.enabled(&metadata(log::Level::Trace)));
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        let saved_env = env::var("SHELTER_LOG_MODE").ok();
        env::remove_var("SHELTER_LOG_MODE");

        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);

        if let Some(val) = saved_env {
            env::set_var("SHELTER_LOG_MODE", val);
        }
    }

    #[test]
    fn test_resolve_flags() {
        assert_eq!(resolve_log_level(true, false), LogLevel::Verbose);
        assert_eq!(resolve_log_level(false, true), LogLevel::Quiet);
        assert_eq!(resolve_log_level(true, true), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        let saved_env = env::var("SHELTER_LOG_MODE").ok();

        env::set_var("SHELTER_LOG_MODE", "verbose");
        assert_eq!(resolve_log_level(false, false), LogLevel::Verbose);

        env::set_var("SHELTER_LOG_MODE", "invalid");
        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);

        env::set_var("SHELTER_LOG_MODE", "normal");
        assert_eq!(resolve_log_level(false, true), LogLevel::Quiet);

        match saved_env {
            Some(val) => env::set_var("SHELTER_LOG_MODE", val),
            None => env::remove_var("SHELTER_LOG_MODE"),
        }
    }

    #[test]
    fn test_init_logger_sets_max_level() {
        init_logger(false, true);
        assert_eq!(log::max_level(), log::LevelFilter::Off);
        init_logger(true, false);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
