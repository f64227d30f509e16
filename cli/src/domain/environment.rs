//! Environment validation.
//!
//! Each variable is a tagged union of a literal value and a secret. Secret
//! values end up in a process environment, which cannot carry NUL bytes, so
//! those are rejected here as well.

use admit_types::{Environment, Variable, VariableType};

use crate::domain::error::ValidationError;
use crate::domain::secret::validate_secret;

/// Validates every variable in order and returns the first failure.
///
/// # Errors
///
/// Returns an error describing the first inconsistent variable.
pub fn validate_environment(environment: &Environment) -> Result<(), ValidationError> {
    environment
        .variables
        .iter()
        .try_for_each(validate_variable)
        .inspect_err(|err| {
            tracing::debug!(kind = %err.kind(), error = %err, "environment rejected");
        })
}

/// Validates a single environment variable.
///
/// # Errors
///
/// For `SECRET` variables, the checks run in the order secret present,
/// value absent, secret valid, no NUL bytes. For `VALUE` variables, value
/// present then secret absent. `UNKNOWN` variables are always rejected.
pub fn validate_variable(variable: &Variable) -> Result<(), ValidationError> {
    let name = &variable.name;
    match variable.kind {
        VariableType::Secret => {
            let Some(secret) = &variable.secret else {
                return Err(ValidationError::MissingVariableSecret { name: name.clone() });
            };
            if variable.value.is_some() {
                return Err(ValidationError::UnexpectedVariableValue { name: name.clone() });
            }
            validate_secret(secret).map_err(|source| ValidationError::InvalidVariableSecret {
                name: name.clone(),
                source: Box::new(source),
            })?;
            if secret.value_bytes().contains(&0) {
                return Err(ValidationError::SecretContainsNullByte { name: name.clone() });
            }
        }
        VariableType::Value => {
            if variable.value.is_none() {
                return Err(ValidationError::MissingVariableValue { name: name.clone() });
            }
            if variable.secret.is_some() {
                return Err(ValidationError::UnexpectedVariableSecret { name: name.clone() });
            }
        }
        VariableType::Unknown => return Err(ValidationError::UnknownVariableType),
    }
    Ok(())
}
