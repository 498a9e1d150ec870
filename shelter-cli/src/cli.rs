//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CompletionsCommand, DeleteAllCommand, DeleteCommand, GetCommand,
    InsertDummyCommand, ListCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for the shelter pet record store.
#[derive(Parser)]
#[command(name = "shelter")]
#[command(version, about = "Manage the shelter's pet records", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SHELTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SHELTER_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "SHELTER_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List pets
    List(ListCommand),

    /// Show one pet
    Get(GetCommand),

    /// Add a pet
    Add(AddCommand),

    /// Update fields of one pet, or of every pet
    Update(UpdateCommand),

    /// Delete one pet, or every pet with --all
    Delete(DeleteCommand),

    /// Insert the sample pet Toto (Terrier, male, 7)
    InsertDummy(InsertDummyCommand),

    /// Delete every pet
    DeleteAll(DeleteAllCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
