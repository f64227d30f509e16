//! Container settings for a task or executor.

use serde::{Deserialize, Serialize};

use crate::volume::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    Docker,
    Mesos,
}

/// Container description: runtime plus the volumes it mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    #[serde(rename = "type")]
    pub kind: ContainerType,
    #[serde(default)]
    pub volumes: Vec<Volume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl ContainerInfo {
    #[must_use]
    pub fn mesos(volumes: Vec<Volume>) -> Self {
        Self {
            kind: ContainerType::Mesos,
            volumes,
            hostname: None,
        }
    }
}
