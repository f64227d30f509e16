//! Integration tests for `admit config`.
//!
//! All filesystem-touching tests set `ADMIT_CONFIG` or `--config` to a temp
//! path so they never read or write `~/.admit/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn admit() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("admit"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    admit()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    admit()
        .args(["config", "show"])
        .env("ADMIT_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("limits.name_max:"))
        .stdout(predicate::str::contains("human"));
}

#[test]
fn test_config_set_then_show_json() {
    let (_dir, path) = temp_config_path();
    admit()
        .args(["config", "set", "limits.name_max", "128"])
        .env("ADMIT_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set limits.name_max = 128"));

    let output = admit()
        .args(["--json", "config", "show"])
        .env("ADMIT_CONFIG", &path)
        .output()
        .expect("run");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(value["limits"]["name_max"], 128);
    assert_eq!(value["path"], path.as_str());
}

#[test]
fn test_config_flag_overrides_env() {
    let (_dir, env_path) = temp_config_path();
    let (_other, flag_path) = temp_config_path();
    admit()
        .args(["--config", &flag_path, "config", "set", "output.format", "json"])
        .env("ADMIT_CONFIG", &env_path)
        .assert()
        .success();

    assert!(std::path::Path::new(&flag_path).exists());
    assert!(!std::path::Path::new(&env_path).exists());
}

#[test]
fn test_config_set_name_max_above_host_limit_warns() {
    let (_dir, path) = temp_config_path();
    admit()
        .args(["config", "set", "limits.name_max", "4096"])
        .env("ADMIT_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds this host's NAME_MAX"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    admit()
        .args(["config", "set", "security.level", "strict"])
        .env("ADMIT_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: security.level"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_invalid_format_json_error() {
    let (_dir, path) = temp_config_path();
    let output = admit()
        .args(["--json", "config", "set", "output.format", "xml"])
        .env("ADMIT_CONFIG", &path)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(value["code"], "invalid_config");
}

#[test]
fn test_config_show_rejects_out_of_range_file() {
    let (_dir, path) = temp_config_path();
    std::fs::write(&path, "limits:\n  name_max: 0\n").unwrap();
    admit()
        .args(["config", "show"])
        .env("ADMIT_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("limits.name_max"));
}
