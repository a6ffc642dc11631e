// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
//! End-to-end tests for the `carton` binary. Every run points `--config-dir`
//! at a temp dir so the user's real preferences are never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn carton(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("carton").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config.path());
    cmd
}

#[test]
fn show_prints_carton_and_derived_values() {
    let dir = TempDir::new().unwrap();
    carton(&dir)
        .args(["show", "2 m × 3 m × 4 m", "--unit", "mm"])
        .assert()
        .success()
        .stdout("2000 mm × 3000 mm × 4000 mm\nvolume: 24 m³\nsurface area: 52 m²\n");
}

#[test]
fn combine_prints_positional_maximum() {
    let dir = TempDir::new().unwrap();
    carton(&dir)
        .args(["combine", "1 m × 5 m × 2 m", "300 cm × 100 cm × 400 cm"])
        .assert()
        .success()
        .stdout("3 m × 5 m × 4 m\n");
}

#[test]
fn compare_exit_code_reflects_equality() {
    let dir = TempDir::new().unwrap();
    carton(&dir)
        .args(["compare", "1 m × 2 m × 3 m", "3000 mm × 1000 mm × 2000 mm"])
        .assert()
        .success()
        .stdout("equal\n");
    carton(&dir)
        .args(["compare", "1 m × 2 m × 3 m", "1 m × 2 m × 4 m"])
        .assert()
        .code(1)
        .stdout("different\n");
}

#[test]
fn bad_input_exits_with_two() {
    let dir = TempDir::new().unwrap();
    carton(&dir)
        .args(["show", "1 xx 2 m 3 m"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown unit of measure"));
    carton(&dir)
        .args(["show", "1 m × 0 m × 3 m"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("edge 2 is out of range"));
}

#[test]
fn stored_prefs_apply_to_later_runs() {
    let dir = TempDir::new().unwrap();
    carton(&dir)
        .args(["prefs", "--unit", "cm", "--policy", "trailing"])
        .assert()
        .success()
        .stdout("unit: cm\npolicy: trailing\n");
    assert!(dir.path().join("carton_cli.json").exists());

    // Trailing policy: every number is read in the last unit (mm).
    carton(&dir)
        .args(["show", "1000 m × 2000 cm × 3000 mm"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("100 cm × 200 cm × 300 cm\n"));

    carton(&dir)
        .arg("prefs")
        .assert()
        .success()
        .stdout("unit: cm\npolicy: trailing\n");
}
