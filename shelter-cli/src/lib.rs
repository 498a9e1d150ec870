//! Library exports for shelter-cli.
//!
//! This module exports the CLI structure so tools can generate man pages
//! and completions from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
