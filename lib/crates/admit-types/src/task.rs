//! A task as submitted by a framework, bundling every entity that is
//! validated before the task is admitted.

use serde::{Deserialize, Serialize};

use crate::command::CommandInfo;
use crate::container::ContainerInfo;
use crate::id::{AgentId, ExecutorId, FrameworkId, TaskId};
use crate::resources::ResourceList;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub name: String,
    pub task_id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<FrameworkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<ExecutorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerInfo>,
    #[serde(default)]
    pub resources: ResourceList,
}
