//! Environment variables, plain or secret-backed.

use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// Which payload a [`Variable`] carries.
///
/// `VALUE` is the protocol default: both an absent tag and a tag added by a
/// newer peer decode as `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Unknown,
    Secret,
    #[default]
    #[serde(other)]
    Value,
}

/// A single environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: VariableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
}

impl Variable {
    /// A `VALUE` variable.
    #[must_use]
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableType::Value,
            value: Some(value.into()),
            secret: None,
        }
    }

    /// A `SECRET` variable.
    #[must_use]
    pub fn from_secret(name: impl Into<String>, secret: Secret) -> Self {
        Self {
            name: name.into(),
            kind: VariableType::Secret,
            value: None,
            secret: Some(secret),
        }
    }
}

/// Ordered list of variables; order carries no meaning for validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl FromIterator<Variable> for Environment {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}
