//! Integration tests for `admit check`.
//!
//! Every test points `ADMIT_CONFIG` at a temp path so the user's
//! `~/.admit/config.yaml` is never read.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn write(&self, name: &str, text: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).expect("write document");
        path.to_string_lossy().into_owned()
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    fn admit(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("admit"));
        cmd.env("NO_COLOR", "1")
            .env("ADMIT_CONFIG", self.config_path())
            .env_remove("RUST_LOG");
        cmd
    }
}

const CONTAINER_WITH_EMPTY_VOLUME: &str = r#"{
  "type": "MESOS",
  "volumes": [
    {"container_path": "/data", "host_path": "/srv/data", "mode": "RO"},
    {"container_path": "/scratch"}
  ]
}"#;

// ── Verdicts and exit codes ──────────────────────────────────────────────────

#[test]
fn test_valid_id_exits_zero() {
    let sb = Sandbox::new();
    let path = sb.write("task-id.json", r#"{"value":"web-1"}"#);
    sb.admit()
        .args(["check", "task-id", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-id admitted"));
}

#[test]
fn test_container_with_empty_volume_exits_one_and_names_index() {
    let sb = Sandbox::new();
    let path = sb.write("container.json", CONTAINER_WITH_EMPTY_VOLUME);
    sb.admit()
        .args(["check", "container", &path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("container rejected"))
        .stderr(predicate::str::contains("Invalid volume at index 1"));
}

#[test]
fn test_container_rejection_json_report() {
    let sb = Sandbox::new();
    let path = sb.write("container.json", CONTAINER_WITH_EMPTY_VOLUME);
    let output = sb
        .admit()
        .args(["--json", "check", "container", &path])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(report["kind"], "container");
    assert_eq!(report["admitted"], false);
    assert_eq!(report["error"]["kind"], "inconsistent_volume_discriminator");
    assert_eq!(
        report["error"]["message"],
        "Invalid volume at index 1: Only one of them should be set: 'host_path', 'image' and 'source'"
    );
}

#[test]
fn test_accepted_json_report_has_null_error() {
    let sb = Sandbox::new();
    let path = sb.write(
        "res.json",
        r#"[{"name":"gpus","type":"SCALAR","scalar":{"value":2.0}}]"#,
    );
    let output = sb
        .admit()
        .args(["check", "resources", &path, "--json"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(report["admitted"], true);
    assert!(report["error"].is_null());
}

#[test]
fn test_yaml_document_selected_by_extension() {
    let sb = Sandbox::new();
    let path = sb.write(
        "env.yaml",
        "variables:\n  - name: TOKEN\n    type: SECRET\n    secret:\n      type: REFERENCE\n      reference:\n        name: api-token\n",
    );
    sb.admit()
        .args(["check", "environment", &path])
        .assert()
        .success();
}

#[test]
fn test_stdin_document() {
    let sb = Sandbox::new();
    sb.admit()
        .args(["check", "secret", "-"])
        .write_stdin(r#"{"type":"VALUE","reference":{"name":"db"},"value":{"data":"cHc="}}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Secret of type VALUE must not have the 'reference' field set",
        ));
}

#[test]
fn test_quiet_suppresses_acceptance_only() {
    let sb = Sandbox::new();
    let good = sb.write("good.json", r#"{"value":"fw"}"#);
    let bad = sb.write("bad.json", r#"{"value":""}"#);

    sb.admit()
        .args(["-q", "check", "framework-id", &good])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    sb.admit()
        .args(["-q", "check", "framework-id", &bad])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ID must not be empty"));
}

#[test]
fn test_task_bundle_fractional_gpus() {
    let sb = Sandbox::new();
    let path = sb.write(
        "task.yaml",
        "name: train\ntask_id:\n  value: train-1\nresources:\n  - name: gpus\n    type: SCALAR\n    scalar:\n      value: 0.5\n",
    );
    sb.admit()
        .args(["check", "task", &path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "The 'gpus' resource must be an unsigned integer, got 0.500",
        ));
}

// ── Configuration influences checks ──────────────────────────────────────────

#[test]
fn test_configured_name_max_applies() {
    let sb = Sandbox::new();
    std::fs::write(sb.config_path(), "limits:\n  name_max: 3\n").unwrap();
    let path = sb.write("agent.json", r#"{"value":"agent-1"}"#);
    sb.admit()
        .args(["check", "agent-id", &path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not be greater than 3 characters"));
}

#[test]
fn test_configured_json_format() {
    let sb = Sandbox::new();
    std::fs::write(sb.config_path(), "output:\n  format: json\n").unwrap();
    let path = sb.write("id.json", r#"{"value":"ok"}"#);
    let output = sb
        .admit()
        .args(["check", "executor-id", &path])
        .output()
        .expect("run");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(report["kind"], "executor-id");
}

// ── Failures before a verdict ────────────────────────────────────────────────

#[test]
fn test_missing_file_exits_one() {
    let sb = Sandbox::new();
    sb.admit()
        .args(["check", "volume", "/nonexistent/volume.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/volume.json"));
}

#[test]
fn test_malformed_document_json_error_object() {
    let sb = Sandbox::new();
    let path = sb.write("volume.json", "{\"container_path\":");
    let output = sb
        .admit()
        .args(["--json", "check", "volume", &path])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "parse_error");
    assert!(value["message"].as_str().unwrap().contains("as JSON"));
}
