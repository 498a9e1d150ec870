//! Build script for shelter-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("shelter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage the shelter's pet records")
        .long_about("Command-line tool for the shelter pet record store")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SHELTER_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SHELTER_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("SHELTER_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List pets")
                .long_about("List pets, optionally filtered and sorted, as a table, JSON, CSV or TSV"),
            Command::new("get")
                .about("Show one pet")
                .long_about("Show the pet at pets/{id}; exits with status 1 if there is none"),
            Command::new("add")
                .about("Add a pet")
                .long_about("Insert a pet and print its resource"),
            Command::new("update")
                .about("Update fields of one pet, or of every pet")
                .long_about("Overwrite the given fields and print the number of pets changed"),
            Command::new("delete")
                .about("Delete one pet, or every pet with --all")
                .long_about("Delete pets and print the number removed"),
            Command::new("insert-dummy")
                .about("Insert the sample pet Toto")
                .long_about("Insert Toto, a male Terrier weighing 7"),
            Command::new("delete-all")
                .about("Delete every pet")
                .long_about("Delete every pet and print the number removed"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("shelter.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
