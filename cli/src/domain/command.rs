//! Command validation.

use admit_types::CommandInfo;

use crate::domain::environment::validate_environment;
use crate::domain::error::ValidationError;

/// Validates a command. Only the embedded environment carries rules today;
/// an absent environment is valid.
///
/// # Errors
///
/// Returns the environment's first failure unchanged.
pub fn validate_command(command: &CommandInfo) -> Result<(), ValidationError> {
    match &command.environment {
        Some(environment) => validate_environment(environment),
        None => Ok(()),
    }
}
