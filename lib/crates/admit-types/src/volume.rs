//! Container volume mounts.
//!
//! A [`Volume`] is populated from exactly one of `host_path`, `image` or
//! `source`. Source-backed volumes carry a second discriminator,
//! [`SourceType`], which unlike the secret and variable tags is an open set:
//! tags from newer peers land in `SourceType::Unknown` and are rejected by
//! validation rather than being reinterpreted.

use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// Mount mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "RW")]
    ReadWrite,
    #[serde(rename = "RO")]
    ReadOnly,
}

/// A volume mounted into a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub mode: Mode,
    pub container_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<VolumeSource>,
}

impl Volume {
    /// A volume with none of the mutually exclusive slots populated.
    #[must_use]
    pub fn bare(container_path: impl Into<String>) -> Self {
        Self {
            mode: Mode::ReadWrite,
            container_path: container_path.into(),
            host_path: None,
            image: None,
            source: None,
        }
    }

    /// A legacy host-path volume.
    #[must_use]
    pub fn host_path(container_path: impl Into<String>, host_path: impl Into<String>) -> Self {
        Self {
            host_path: Some(host_path.into()),
            ..Self::bare(container_path)
        }
    }

    /// A source-backed volume.
    #[must_use]
    pub fn with_source(container_path: impl Into<String>, source: VolumeSource) -> Self {
        Self {
            source: Some(source),
            ..Self::bare(container_path)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    Appc,
    Docker,
}

/// Container image whose root filesystem is mounted as the volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "type")]
    pub kind: ImageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appc: Option<AppcImage>,
    #[serde(default = "default_cached")]
    pub cached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerImage {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppcImage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn default_cached() -> bool {
    true
}

/// Kind of a [`VolumeSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    DockerVolume,
    HostPath,
    SandboxPath,
    Secret,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Where a source-backed volume comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeSource {
    #[serde(rename = "type", default)]
    pub kind: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_volume: Option<DockerVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<SourceHostPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_path: Option<SandboxPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
}

/// A volume provided by a Docker volume driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerVolume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    pub name: String,
}

/// A path on the agent host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHostPath {
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SandboxPathType {
    #[serde(rename = "SELF")]
    Own,
    Parent,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A path relative to this container's sandbox, or its parent's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxPath {
    #[serde(rename = "type", default)]
    pub kind: SandboxPathType,
    pub path: String,
}
