use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

fn shelter(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelter").expect("failed to locate shelter binary");
    cmd.arg("--data-dir").arg(data_dir.path()).arg("--quiet");
    cmd
}

fn insert_dummy(data_dir: &TempDir) {
    let status = shelter(data_dir)
        .arg("insert-dummy")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to execute shelter insert-dummy");
    assert!(status.success(), "shelter insert-dummy failed");
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("shelter").expect("failed to locate shelter binary");
            black_box(cmd.arg("--version").output().expect("failed to run shelter"));
        });
    });
}

fn bench_cli_add(c: &mut Criterion) {
    c.bench_function("cli_add", |b| {
        b.iter_batched(
            || TempDir::new().expect("failed to create temp dir"),
            |data_dir| {
                let status = shelter(&data_dir)
                    .args(["add", "--name", "Bench", "--gender", "female", "--weight", "4"])
                    .stdout(Stdio::null())
                    .status()
                    .expect("failed to execute shelter add");
                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_list(c: &mut Criterion) {
    c.bench_function("cli_list", |b| {
        b.iter_batched(
            || {
                let data_dir = TempDir::new().expect("failed to create temp dir");
                for _ in 0..50 {
                    insert_dummy(&data_dir);
                }
                data_dir
            },
            |data_dir| {
                let output = shelter(&data_dir)
                    .args(["list", "--format", "json"])
                    .output()
                    .expect("failed to execute shelter list");
                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(cli_benches, bench_cli_startup, bench_cli_add, bench_cli_list);
criterion_main!(cli_benches);
