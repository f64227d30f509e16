//! Volume validation.
//!
//! Only one of the following fields can be set:
//!   1. `host_path`
//!   2. `image`
//!   3. `source`
//!
//! Source-backed volumes must carry the payload their source type names.

use admit_types::{SourceType, Volume, VolumeSource};

use crate::domain::error::ValidationError;

/// # Errors
///
/// Returns an error if not exactly one of `host_path`, `image` and `source`
/// is set, or if the source is inconsistent.
pub fn validate_volume(volume: &Volume) -> Result<(), ValidationError> {
    let populated = [
        volume.host_path.is_some(),
        volume.image.is_some(),
        volume.source.is_some(),
    ]
    .into_iter()
    .filter(|&set| set)
    .count();

    if populated != 1 {
        return Err(ValidationError::AmbiguousVolume);
    }

    match &volume.source {
        Some(source) => validate_volume_source(source),
        None => Ok(()),
    }
}

/// Checks that the payload named by the source type is present.
///
/// Payloads for other source types are not inspected.
///
/// # Errors
///
/// Returns an error naming the missing payload, or reporting an unknown
/// source type.
pub fn validate_volume_source(source: &VolumeSource) -> Result<(), ValidationError> {
    let (present, field, source_type) = match source.kind {
        SourceType::DockerVolume => (
            source.docker_volume.is_some(),
            "docker_volume",
            "DOCKER_VOLUME",
        ),
        SourceType::HostPath => (source.host_path.is_some(), "host_path", "HOST_PATH"),
        SourceType::SandboxPath => (
            source.sandbox_path.is_some(),
            "sandbox_path",
            "SANDBOX_PATH",
        ),
        SourceType::Secret => (source.secret.is_some(), "secret", "SECRET"),
        SourceType::Unknown => return Err(ValidationError::UnknownSourceType),
    };

    if present {
        Ok(())
    } else {
        Err(ValidationError::MissingSourcePayload { field, source_type })
    }
}
