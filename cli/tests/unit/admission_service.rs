//! Unit tests for the admission service: decoding, dispatch and reports.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use admit_cli::application::services::admission::{EntityKind, check_location};
use admit_cli::domain::ErrorKind;
use admit_cli::domain::config::Limits;

use crate::mocks::InMemoryDocuments;

fn check(docs: &InMemoryDocuments, location: &str, kind: EntityKind) -> (bool, Option<(ErrorKind, String)>) {
    let report = check_location(docs, location, kind, &Limits::default()).expect("decodes");
    (report.admitted, report.error.map(|e| (e.kind, e.message)))
}

// ── Identifiers ──────────────────────────────────────────────────────────────

#[test]
fn test_every_id_kind_rejects_separators() {
    let docs = InMemoryDocuments::default().with("id.json", r#"{"value":"a/b"}"#);
    for kind in [
        EntityKind::TaskId,
        EntityKind::ExecutorId,
        EntityKind::FrameworkId,
        EntityKind::AgentId,
    ] {
        let (admitted, error) = check(&docs, "id.json", kind);
        assert!(!admitted, "{kind} admitted 'a/b'");
        assert_eq!(error.unwrap().1, "'a/b' contains invalid characters");
    }
}

#[test]
fn test_reserved_id_message() {
    let docs = InMemoryDocuments::default().with("id.yaml", "value: '..'\n");
    let (_, error) = check(&docs, "id.yaml", EntityKind::TaskId);
    assert_eq!(
        error,
        Some((ErrorKind::MalformedIdentifier, "'..' is disallowed".to_string()))
    );
}

// ── Secrets and environments ─────────────────────────────────────────────────

#[test]
fn test_reference_secret_with_value_names_the_reference() {
    let docs = InMemoryDocuments::default().with(
        "secret.json",
        r#"{"type":"REFERENCE","reference":{"name":"db"},"value":{"data":"c2VjcmV0"}}"#,
    );
    let (admitted, error) = check(&docs, "secret.json", EntityKind::Secret);
    assert!(!admitted);
    assert_eq!(
        error.unwrap().1,
        "Secret 'db' of type REFERENCE must not have the 'value' field set"
    );
}

#[test]
fn test_unknown_secret_tag_is_admitted() {
    let docs = InMemoryDocuments::default().with("secret.json", r#"{"type":"VAULT"}"#);
    let (admitted, _) = check(&docs, "secret.json", EntityKind::Secret);
    assert!(admitted);
}

#[test]
fn test_environment_rejects_null_byte_secret() {
    let docs = InMemoryDocuments::default().with(
        "env.yaml",
        "variables:\n  - name: TOKEN\n    type: SECRET\n    secret:\n      type: VALUE\n      value:\n        data: AAE=\n",
    );
    let (admitted, error) = check(&docs, "env.yaml", EntityKind::Environment);
    assert!(!admitted);
    let (kind, message) = error.unwrap();
    assert_eq!(kind, ErrorKind::NullByteInSecretValue);
    assert!(message.starts_with("Environment variable 'TOKEN' specifies a secret containing null bytes"));
}

#[test]
fn test_environment_variable_without_type_is_a_value() {
    let docs = InMemoryDocuments::default()
        .with("env.json", r#"{"variables":[{"name":"PATH","value":"/bin"}]}"#);
    let (admitted, _) = check(&docs, "env.json", EntityKind::Environment);
    assert!(admitted);
}

#[test]
fn test_command_surfaces_environment_failure() {
    let docs = InMemoryDocuments::default().with(
        "cmd.json",
        r#"{"value":"run","environment":{"variables":[{"name":"X","type":"UNKNOWN"}]}}"#,
    );
    let (_, error) = check(&docs, "cmd.json", EntityKind::Command);
    assert_eq!(
        error.unwrap().0,
        ErrorKind::DisallowedEnvironmentVariableKind
    );
}

// ── Volumes and containers ───────────────────────────────────────────────────

#[test]
fn test_volume_with_unknown_source_type() {
    let docs = InMemoryDocuments::default().with(
        "vol.json",
        r#"{"container_path":"/data","source":{"type":"CSI_VOLUME"}}"#,
    );
    let (_, error) = check(&docs, "vol.json", EntityKind::Volume);
    assert_eq!(
        error,
        Some((
            ErrorKind::UnknownVolumeSourceKind,
            "'source.type' is unknown".to_string()
        ))
    );
}

#[test]
fn test_volume_with_mismatched_source_payload() {
    let docs = InMemoryDocuments::default().with(
        "vol.json",
        r#"{"container_path":"/data","source":{"type":"HOST_PATH","docker_volume":{"name":"v"}}}"#,
    );
    let (_, error) = check(&docs, "vol.json", EntityKind::Volume);
    assert_eq!(
        error.unwrap().1,
        "'source.host_path' is not set for HOST_PATH volume"
    );
}

#[test]
fn test_container_reports_failing_volume_position() {
    let docs = InMemoryDocuments::default().with(
        "container.json",
        r#"{"type":"MESOS","volumes":[
            {"container_path":"/a","host_path":"/srv/a","mode":"RO"},
            {"container_path":"/b"}
        ]}"#,
    );
    let (admitted, error) = check(&docs, "container.json", EntityKind::Container);
    assert!(!admitted);
    let (kind, message) = error.unwrap();
    assert_eq!(kind, ErrorKind::InconsistentVolumeDiscriminator);
    assert_eq!(
        message,
        "Invalid volume at index 1: Only one of them should be set: 'host_path', 'image' and 'source'"
    );
}

// ── Resources ────────────────────────────────────────────────────────────────

#[test]
fn test_gpu_quantities() {
    let cases = [("2.0", true), ("2.5", false), ("1.999", false), ("0", true)];
    for (quantity, expected) in cases {
        let text = format!(r#"[{{"name":"gpus","type":"SCALAR","scalar":{{"value":{quantity}}}}}]"#);
        let docs = InMemoryDocuments::default().with("res.json", &text);
        let (admitted, _) = check(&docs, "res.json", EntityKind::Resources);
        assert_eq!(admitted, expected, "gpus={quantity}");
    }
}

#[test]
fn test_resources_without_gpus_admitted() {
    let docs = InMemoryDocuments::default().with(
        "res.yaml",
        "- name: cpus\n  type: SCALAR\n  scalar:\n    value: 0.5\n",
    );
    let (admitted, _) = check(&docs, "res.yaml", EntityKind::Resources);
    assert!(admitted);
}

// ── Task bundles ─────────────────────────────────────────────────────────────

const TASK_WITH_BAD_ID_AND_VOLUME: &str = r"
name: web
task_id:
  value: web-1
agent_id:
  value: 'agent/1'
container:
  type: MESOS
  volumes:
    - container_path: /data
";

#[test]
fn test_task_reports_ids_before_container() {
    let docs = InMemoryDocuments::default().with("task.yaml", TASK_WITH_BAD_ID_AND_VOLUME);
    let (_, error) = check(&docs, "task.yaml", EntityKind::Task);
    assert_eq!(error.unwrap().0, ErrorKind::MalformedIdentifier);
}

#[test]
fn test_task_uses_configured_name_max() {
    let docs = InMemoryDocuments::default()
        .with("task.json", r#"{"name":"web","task_id":{"value":"web-0001"}}"#);
    let strict = Limits { name_max: 4 };
    let report = check_location(&docs, "task.json", EntityKind::Task, &strict).expect("decodes");
    assert!(!report.admitted);

    let report =
        check_location(&docs, "task.json", EntityKind::Task, &Limits::default()).expect("decodes");
    assert!(report.admitted);
}

#[test]
fn test_task_reports_fractional_gpus_last() {
    let docs = InMemoryDocuments::default().with(
        "task.json",
        r#"{"name":"train","task_id":{"value":"train-1"},
            "resources":[{"name":"gpus","type":"SCALAR","scalar":{"value":1.5}}]}"#,
    );
    let (_, error) = check(&docs, "task.json", EntityKind::Task);
    assert_eq!(
        error.unwrap().1,
        "The 'gpus' resource must be an unsigned integer, got 1.500"
    );
}

// ── Failures before validation ───────────────────────────────────────────────

#[test]
fn test_missing_document_is_an_error() {
    let docs = InMemoryDocuments::default();
    let err = check_location(&docs, "absent.json", EntityKind::Secret, &Limits::default())
        .unwrap_err();
    assert!(err.to_string().contains("cannot read absent.json"));
}

#[test]
fn test_wrong_shape_is_a_decode_error() {
    let docs = InMemoryDocuments::default().with("vol.json", r#"{"mode":"RW"}"#);
    let err =
        check_location(&docs, "vol.json", EntityKind::Volume, &Limits::default()).unwrap_err();
    assert!(err.to_string().contains("cannot parse vol.json as JSON"));
}
