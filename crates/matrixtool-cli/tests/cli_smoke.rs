//! Smoke tests for the compiled `matrixtool` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("matrixtool").unwrap()
}

fn matrix_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("det"))
        .stdout(predicate::str::contains("inverse"))
        .stdout(predicate::str::contains("fit"));
}

#[test]
fn determinant_of_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = matrix_file(&dir, "a.csv", "1,2\n3,4\n");
    cmd()
        .arg("det")
        .arg(&path)
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn inverse_of_tsv_file_with_precision() {
    let dir = tempfile::tempdir().unwrap();
    let path = matrix_file(&dir, "a.tsv", "2\t1\n1\t1\n");
    cmd()
        .args(["--precision", "1", "inverse"])
        .arg(&path)
        .assert()
        .success()
        .stdout("[1.0\t-1.0]\n[-1.0\t2.0]\n");
}

#[test]
fn singular_matrix_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = matrix_file(&dir, "s.csv", "1,2\n2,4\n");
    cmd().arg("inverse").arg(&path).assert().failure();
    cmd()
        .arg("rank")
        .arg(&path)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn fit_prints_coefficients() {
    let dir = tempfile::tempdir().unwrap();
    let path = matrix_file(&dir, "points.csv", "0,1\n1,2\n2,5\n");
    cmd()
        .arg("fit")
        .arg(&path)
        .assert()
        .success()
        .stdout("[1\t0\t1]\n");
}

#[test]
fn seeded_random_is_stable() {
    let first = cmd()
        .args(["random", "2", "2", "--seed", "9", "--min", "-1", "--max", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    cmd()
        .args(["random", "2", "2", "--seed", "9", "--min", "-1", "--max", "1"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn config_file_sets_precision() {
    let dir = tempfile::tempdir().unwrap();
    let config = matrix_file(&dir, "config.json", "{\"precision\": 3}");
    let path = matrix_file(&dir, "a.csv", "1,2\n3,4\n");
    cmd()
        .arg("--config")
        .arg(&config)
        .arg("det")
        .arg(&path)
        .assert()
        .success()
        .stdout("-2.000\n");
}

#[test]
fn delimiter_flag_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = matrix_file(&dir, "a.txt", "1\t2\n3\t4\n");
    cmd()
        .args(["--delimiter", "tsv", "transpose"])
        .arg(&path)
        .assert()
        .success()
        .stdout("[1\t3]\n[2\t4]\n");
    cmd()
        .args(["--delimiter", "pipe", "det"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["det", "does-not-exist.csv"])
        .assert()
        .failure();
}
