//! Identifier validation.
//!
//! IDs are likely mapped to directories on agents, so the rules are those of
//! a single path component: non-empty, bounded length, not a relative path
//! component, and free of control characters and path separators.

use admit_types::os::{NAME_MAX, POSIX_PATH_SEPARATOR, WINDOWS_PATH_SEPARATOR};
use admit_types::{AgentId, ExecutorId, FrameworkId, TaskId};

use crate::domain::error::ValidationError;

/// Validates a bare ID against the host's [`NAME_MAX`].
///
/// # Errors
///
/// Returns the first violated rule, checked in the order empty, length,
/// reserved value, characters.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    validate_id_within(id, NAME_MAX)
}

/// Validates a bare ID against an explicit component-length limit.
///
/// Length is measured in bytes, as filesystems measure component names.
///
/// # Errors
///
/// Returns the first violated rule, checked in the order empty, length,
/// reserved value, characters.
pub fn validate_id_within(id: &str, name_max: usize) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    if id.len() > name_max {
        return Err(ValidationError::IdTooLong {
            id: id.to_string(),
            max: name_max,
        });
    }

    if id == "." || id == ".." {
        return Err(ValidationError::ReservedId(id.to_string()));
    }

    if id.chars().any(is_invalid_id_char) {
        return Err(ValidationError::InvalidIdCharacters(id.to_string()));
    }

    Ok(())
}

fn is_invalid_id_char(c: char) -> bool {
    c.is_control() || c == POSIX_PATH_SEPARATOR || c == WINDOWS_PATH_SEPARATOR
}

// The typed wrappers share one rule set; they exist so each call site states
// which ID it is checking. `name_max` comes from the configured limits.

/// # Errors
///
/// See [`validate_id_within`].
pub fn validate_task_id(task_id: &TaskId, name_max: usize) -> Result<(), ValidationError> {
    validate_id_within(task_id.as_str(), name_max)
}

/// # Errors
///
/// See [`validate_id_within`].
pub fn validate_executor_id(
    executor_id: &ExecutorId,
    name_max: usize,
) -> Result<(), ValidationError> {
    validate_id_within(executor_id.as_str(), name_max)
}

/// # Errors
///
/// See [`validate_id_within`].
pub fn validate_agent_id(agent_id: &AgentId, name_max: usize) -> Result<(), ValidationError> {
    validate_id_within(agent_id.as_str(), name_max)
}

/// # Errors
///
/// See [`validate_id_within`].
pub fn validate_framework_id(
    framework_id: &FrameworkId,
    name_max: usize,
) -> Result<(), ValidationError> {
    validate_id_within(framework_id.as_str(), name_max)
}
