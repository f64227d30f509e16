//! Top-down validation of a task submission.

use admit_types::TaskSubmission;

use crate::domain::command::validate_command;
use crate::domain::config::Limits;
use crate::domain::container::validate_container;
use crate::domain::error::ValidationError;
use crate::domain::id::{
    validate_agent_id, validate_executor_id, validate_framework_id, validate_task_id,
};
use crate::domain::resources::validate_gpus;

/// Validates every entity a task carries, in the order IDs, command,
/// container, resources, and stops at the first failure.
///
/// # Errors
///
/// Returns the first failure found.
pub fn validate_task(task: &TaskSubmission, limits: &Limits) -> Result<(), ValidationError> {
    let name_max = limits.name_max;
    validate_task_id(&task.task_id, name_max)?;
    if let Some(id) = &task.framework_id {
        validate_framework_id(id, name_max)?;
    }
    if let Some(id) = &task.executor_id {
        validate_executor_id(id, name_max)?;
    }
    if let Some(id) = &task.agent_id {
        validate_agent_id(id, name_max)?;
    }

    if let Some(command) = &task.command {
        validate_command(command)?;
    }

    if let Some(container) = &task.container {
        validate_container(container)?;
    }

    validate_gpus(&task.resources)
}
