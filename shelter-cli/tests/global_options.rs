//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "insert-dummy"])
        .assert()
        .success()
        .stdout("pets/1\n")
        .stderr(predicate::str::contains("opened pets database"));
}

#[test]
fn test_default_output_has_no_debug_logs() {
    let env = TestEnv::new();

    env.command()
        .arg("insert-dummy")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_from_environment() {
    let env = TestEnv::new();

    env.command()
        .env("SHELTER_LOG_MODE", "verbose")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("opened pets database"));
}

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("SHELTER_DATA_DIR", &env.data_dir)
        .arg("insert-dummy")
        .assert()
        .success();

    assert!(env.database_path().exists());
}

#[test]
fn test_data_dir_flag_overrides_environment() {
    let env = TestEnv::new();
    let other = env.path().join("other-data");

    env.command_bare()
        .env("SHELTER_DATA_DIR", &other)
        .arg("--data-dir")
        .arg(&env.data_dir)
        .arg("insert-dummy")
        .assert()
        .success();

    assert!(env.database_path().exists());
    assert!(!other.exists());
}

#[test]
fn test_output_format_from_environment() {
    let env = TestEnv::new();
    env.command().arg("insert-dummy").assert().success();

    env.command()
        .env("SHELTER_OUTPUT_FORMAT", "json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_disable_autoinit_with_existing_database() {
    let env = TestEnv::new();
    env.command().arg("insert-dummy").assert().success();

    env.command()
        .args(["--disable-autoinit", "get", "pets/1"])
        .assert()
        .success();
}

#[test]
fn test_completions_generates_script() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shelter"));
}
