//! Container validation.

use admit_types::ContainerInfo;

use crate::domain::error::ValidationError;
use crate::domain::volume::validate_volume;

/// Validates each volume in order.
///
/// # Errors
///
/// Returns the first volume failure, wrapped with the volume's index.
pub fn validate_container(container: &ContainerInfo) -> Result<(), ValidationError> {
    for (index, volume) in container.volumes.iter().enumerate() {
        validate_volume(volume).map_err(|source| {
            tracing::debug!(
                index,
                container_path = %volume.container_path,
                error = %source,
                "volume rejected"
            );
            ValidationError::InvalidVolume {
                index,
                source: Box::new(source),
            }
        })?;
    }
    Ok(())
}
