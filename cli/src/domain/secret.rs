//! Secret validation: the declared type must match the populated payload.

use admit_types::{Secret, SecretType};

use crate::domain::error::ValidationError;

/// Validates that a secret carries exactly the payload its type names.
///
/// `UNKNOWN` secrets are accepted as-is; the tag is reserved for secret
/// kinds this build does not understand yet.
///
/// # Errors
///
/// Returns an error if the payload for the declared type is missing, or if
/// the other payload is also present.
pub fn validate_secret(secret: &Secret) -> Result<(), ValidationError> {
    match secret.kind {
        SecretType::Reference => {
            let Some(reference) = &secret.reference else {
                return Err(ValidationError::MissingSecretReference);
            };
            if secret.value.is_some() {
                return Err(ValidationError::UnexpectedSecretValue {
                    name: reference.name.clone(),
                });
            }
        }
        SecretType::Value => {
            if secret.value.is_none() {
                return Err(ValidationError::MissingSecretValue);
            }
            if secret.reference.is_some() {
                return Err(ValidationError::UnexpectedSecretReference);
            }
        }
        SecretType::Unknown => {}
    }
    Ok(())
}
