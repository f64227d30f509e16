//! Secrets handed to tasks either by reference or inline.

use serde::{Deserialize, Serialize};

/// Which payload a [`Secret`] carries.
///
/// A tag this build does not know decodes as `Unknown`, which is also the
/// protocol default when the field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecretType {
    Reference,
    Value,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A secret, resolved later by a secret resolver module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Secret {
    #[serde(rename = "type", default)]
    pub kind: SecretType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<SecretValue>,
}

/// Name (and optional key within it) of a secret held by a secret store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Inline secret bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretValue {
    #[serde(with = "crate::bytes")]
    pub data: Vec<u8>,
}

impl Secret {
    /// A `REFERENCE` secret pointing at `name`.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            kind: SecretType::Reference,
            reference: Some(Reference {
                name: name.into(),
                key: None,
            }),
            value: None,
        }
    }

    /// A `VALUE` secret carrying `data` inline.
    #[must_use]
    pub fn inline(data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: SecretType::Value,
            reference: None,
            value: Some(SecretValue { data: data.into() }),
        }
    }

    /// Inline bytes, or an empty slice for reference secrets.
    #[must_use]
    pub fn value_bytes(&self) -> &[u8] {
        self.value.as_ref().map_or(&[], |v| v.data.as_slice())
    }
}
