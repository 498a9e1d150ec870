//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, configuration loading, store access,
//! and output formatting.

use crate::error::CliError;
use shelter::config::Config;
use shelter::database::DATABASE_FILE_NAME;
use shelter::output::OutputFormat;
use shelter::{ConfigBuilder, DatabaseConfig, Gender, Pet, PetProvider};
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory from global options.
///
/// Priority: `--data-dir` (or `SHELTER_DATA_DIR`) > `~/.shelter`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref data_dir) => Ok(data_dir.clone()),
        None => shelter::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut overrides = Config::default();
    if let Some(timeout_seconds) = global.busy_timeout {
        overrides.busy_timeout_ms = Some(u64::from(timeout_seconds) * 1000);
    }
    if global.disable_autoinit {
        overrides.disable_autoinit = Some(true);
    }

    ConfigBuilder::new()
        .with_data_dir(resolve_data_dir(global)?)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the pet store with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_provider(global: &GlobalOptions, config: &Config) -> Result<PetProvider, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && config.disable_autoinit() {
        return Err(CliError::NoDataDirectory);
    }

    let db_config = config.apply_to(DatabaseConfig::new(db_path));
    PetProvider::open(db_config).map_err(CliError::from)
}

/// Parse a gender argument into its stored code.
///
/// Integer codes are passed through unchecked so that the store's validator
/// rejects unknown ones.
pub fn parse_gender_code(value: &str) -> Result<i64, CliError> {
    if let Ok(code) = value.trim().parse::<i64>() {
        return Ok(code);
    }
    value
        .parse::<Gender>()
        .map(Gender::code)
        .map_err(|_| {
            CliError::InvalidArguments(format!(
                "unknown gender '{value}' (expected unknown, male, female or 0-2)"
            ))
        })
}

/// Write pets to stdout in the given format.
pub fn print_pets(format: OutputFormat, pets: &[Pet]) -> Result<(), CliError> {
    let output = format.create_formatter().format(pets)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}
