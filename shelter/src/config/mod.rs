//! Configuration system for shelter.
//!
//! Settings are merged from the following sources (highest to lowest
//! precedence):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (SHELTER_*)
//! 3. `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use shelter::config::{Config, ConfigBuilder};
//! use shelter::OutputFormat;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         output_format: Some(OutputFormat::Json),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.output_format(), OutputFormat::Json);
//! assert_eq!(config.busy_timeout_ms(), 5000);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_BUSY_TIMEOUT_MS};
pub use validator::ConfigValidator;
