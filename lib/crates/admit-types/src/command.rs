//! Command to launch for a task or executor.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// A command plus the environment and artifacts it runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Run `value` through `/bin/sh -c` when true; exec it with `arguments` otherwise.
    #[serde(default = "default_shell")]
    pub shell: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<CommandUri>,
}

/// An artifact fetched into the sandbox before the command starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandUri {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

fn default_shell() -> bool {
    true
}

impl Default for CommandInfo {
    fn default() -> Self {
        Self {
            value: None,
            shell: default_shell(),
            arguments: Vec::new(),
            user: None,
            environment: None,
            uris: Vec::new(),
        }
    }
}
