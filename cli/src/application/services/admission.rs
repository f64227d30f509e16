//! Application service — admission checks.
//!
//! Decodes an entity document (the deserialization step that sits in front
//! of validation), runs the matching domain validator, and turns the outcome
//! into an [`AdmissionReport`]. Decoding failures are errors; validation
//! failures are a rejected report.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use admit_types::{
    AgentId, CommandInfo, ContainerInfo, Environment, ExecutorId, FrameworkId, ResourceList,
    Secret, TaskId, TaskSubmission, Volume,
};

use crate::application::ports::{Document, DocumentFormat, DocumentSource};
use crate::domain::config::Limits;
use crate::domain::error::{ErrorKind, ValidationError};
use crate::domain::{
    validate_agent_id, validate_command, validate_container, validate_environment,
    validate_executor_id, validate_framework_id, validate_gpus, validate_secret, validate_task,
    validate_task_id, validate_volume,
};

/// Entity kinds accepted for admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    TaskId,
    ExecutorId,
    FrameworkId,
    AgentId,
    Secret,
    Environment,
    Command,
    Volume,
    Container,
    Resources,
    Task,
}

impl EntityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskId => "task-id",
            Self::ExecutorId => "executor-id",
            Self::FrameworkId => "framework-id",
            Self::AgentId => "agent-id",
            Self::Secret => "secret",
            Self::Environment => "environment",
            Self::Command => "command",
            Self::Volume => "volume",
            Self::Container => "container",
            Self::Resources => "resources",
            Self::Task => "task",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rejection carried by a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&ValidationError> for Rejection {
    fn from(err: &ValidationError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Outcome of one admission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionReport {
    pub kind: EntityKind,
    pub origin: String,
    pub admitted: bool,
    pub error: Option<Rejection>,
}

impl AdmissionReport {
    fn new(kind: EntityKind, origin: &str, outcome: Result<(), ValidationError>) -> Self {
        let error = outcome.as_ref().err().map(Rejection::from);
        Self {
            kind,
            origin: origin.to_string(),
            admitted: error.is_none(),
            error,
        }
    }
}

/// Read the document at `location` and check it as `kind`.
///
/// # Errors
///
/// Returns an error if the document cannot be read or decoded. A document
/// that decodes but breaks a rule is not an error: it yields a report with
/// `admitted == false`.
pub fn check_location(
    source: &impl DocumentSource,
    location: &str,
    kind: EntityKind,
    limits: &Limits,
) -> Result<AdmissionReport> {
    let document = source.read(location)?;
    check_document(&document, kind, limits)
}

/// Decode `document` as `kind` and validate it.
///
/// # Errors
///
/// Returns an error if the document cannot be decoded as `kind`.
pub fn check_document(
    document: &Document,
    kind: EntityKind,
    limits: &Limits,
) -> Result<AdmissionReport> {
    let name_max = limits.name_max;
    let outcome = match kind {
        EntityKind::TaskId => validate_task_id(&decode::<TaskId>(document)?, name_max),
        EntityKind::ExecutorId => validate_executor_id(&decode::<ExecutorId>(document)?, name_max),
        EntityKind::FrameworkId => {
            validate_framework_id(&decode::<FrameworkId>(document)?, name_max)
        }
        EntityKind::AgentId => validate_agent_id(&decode::<AgentId>(document)?, name_max),
        EntityKind::Secret => validate_secret(&decode::<Secret>(document)?),
        EntityKind::Environment => validate_environment(&decode::<Environment>(document)?),
        EntityKind::Command => validate_command(&decode::<CommandInfo>(document)?),
        EntityKind::Volume => validate_volume(&decode::<Volume>(document)?),
        EntityKind::Container => validate_container(&decode::<ContainerInfo>(document)?),
        EntityKind::Resources => validate_gpus(&decode::<ResourceList>(document)?),
        EntityKind::Task => validate_task(&decode::<TaskSubmission>(document)?, limits),
    };

    let report = AdmissionReport::new(kind, &document.origin, outcome);
    match &report.error {
        None => tracing::info!(kind = %kind, origin = %report.origin, "admitted"),
        Some(rejection) => tracing::info!(
            kind = %kind,
            origin = %report.origin,
            error_kind = %rejection.kind,
            "rejected"
        ),
    }
    Ok(report)
}

fn decode<T: DeserializeOwned>(document: &Document) -> Result<T> {
    match document.format {
        DocumentFormat::Json => serde_json::from_str(&document.text)
            .with_context(|| format!("cannot parse {} as JSON", document.origin)),
        DocumentFormat::Yaml => serde_yaml::from_str(&document.text)
            .with_context(|| format!("cannot parse {} as YAML", document.origin)),
    }
}
