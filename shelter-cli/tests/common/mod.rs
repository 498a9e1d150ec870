//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const SHELTER_VARS: [&str; 7] = [
    "SHELTER_DATA_DIR",
    "SHELTER_BUSY_TIMEOUT",
    "SHELTER_DISABLE_AUTOINIT",
    "SHELTER_LOG_MODE",
    "SHELTER_BUSY_TIMEOUT_MS",
    "SHELTER_UPGRADE_POLICY",
    "SHELTER_OUTPUT_FORMAT",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the shelter data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; shelter creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("shelter-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// SHELTER_* variables from the outer environment are removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelter").expect("Failed to find shelter binary");
        for var in SHELTER_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the database file in the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("shelter.db")
    }

    /// Write `contents` to `config.yaml` in the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data directory");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config.yaml");
    }

    /// Run a command that must succeed and return its stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run shelter");

        assert!(
            output.status.success(),
            "shelter {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Add a pet and return the id from the printed resource.
    pub fn add_pet(&self, name: &str, breed: Option<&str>, gender: &str, weight: i64) -> i64 {
        let weight = weight.to_string();
        let mut args = vec!["add", "--name", name, "--gender", gender, "--weight", &weight];
        if let Some(breed) = breed {
            args.extend(["--breed", breed]);
        }
        parse_resource_id(&self.run(&args))
    }

    /// List pets as JSON.
    pub fn list_json(&self, extra: &[&str]) -> Vec<serde_json::Value> {
        let mut args = vec!["list", "--format", "json"];
        args.extend_from_slice(extra);
        serde_json::from_str(&self.run(&args)).expect("list output is not JSON")
    }
}

/// Parse the id out of a printed `pets/{id}` resource.
pub fn parse_resource_id(output: &str) -> i64 {
    output
        .trim()
        .strip_prefix("pets/")
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("Output is not an item resource: {output:?}"))
}
