//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use admit_types::Scalar;
use serde::Serialize;
use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// Coarse classification of a [`ValidationError`], stable across wording
/// changes and safe to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedIdentifier,
    InconsistentSecret,
    InconsistentEnvironmentVariable,
    DisallowedEnvironmentVariableKind,
    NullByteInSecretValue,
    InconsistentVolumeDiscriminator,
    UnknownVolumeSourceKind,
    FractionalAcceleratorQuantity,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedIdentifier => "malformed_identifier",
            Self::InconsistentSecret => "inconsistent_secret",
            Self::InconsistentEnvironmentVariable => "inconsistent_environment_variable",
            Self::DisallowedEnvironmentVariableKind => "disallowed_environment_variable_kind",
            Self::NullByteInSecretValue => "null_byte_in_secret_value",
            Self::InconsistentVolumeDiscriminator => "inconsistent_volume_discriminator",
            Self::UnknownVolumeSourceKind => "unknown_volume_source_kind",
            Self::FractionalAcceleratorQuantity => "fractional_accelerator_quantity",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first rule an entity violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ID must not be empty")]
    EmptyId,

    #[error("ID '{id}' must not be greater than {max} characters")]
    IdTooLong { id: String, max: usize },

    #[error("'{0}' is disallowed")]
    ReservedId(String),

    #[error("'{0}' contains invalid characters")]
    InvalidIdCharacters(String),

    #[error("Secret of type REFERENCE must have the 'reference' field set")]
    MissingSecretReference,

    #[error("Secret '{name}' of type REFERENCE must not have the 'value' field set")]
    UnexpectedSecretValue { name: String },

    #[error("Secret of type VALUE must have the 'value' field set")]
    MissingSecretValue,

    #[error("Secret of type VALUE must not have the 'reference' field set")]
    UnexpectedSecretReference,

    #[error("Environment variable '{name}' of type 'SECRET' must have a secret set")]
    MissingVariableSecret { name: String },

    #[error("Environment variable '{name}' of type 'SECRET' must not have a value set")]
    UnexpectedVariableValue { name: String },

    #[error("Environment variable '{name}' specifies an invalid secret: {source}")]
    InvalidVariableSecret {
        name: String,
        #[source]
        source: Box<ValidationError>,
    },

    #[error(
        "Environment variable '{name}' specifies a secret containing null bytes, \
         which is not allowed in the environment"
    )]
    SecretContainsNullByte { name: String },

    #[error("Environment variable '{name}' of type 'VALUE' must have a value set")]
    MissingVariableValue { name: String },

    #[error("Environment variable '{name}' of type 'VALUE' must not have a secret set")]
    UnexpectedVariableSecret { name: String },

    #[error("Environment variable of type 'UNKNOWN' is not allowed")]
    UnknownVariableType,

    #[error("Only one of them should be set: 'host_path', 'image' and 'source'")]
    AmbiguousVolume,

    #[error("'source.{field}' is not set for {source_type} volume")]
    MissingSourcePayload {
        field: &'static str,
        source_type: &'static str,
    },

    #[error("'source.type' is unknown")]
    UnknownSourceType,

    #[error("Invalid volume at index {index}: {source}")]
    InvalidVolume {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("The 'gpus' resource must be an unsigned integer, got {quantity}")]
    FractionalGpus { quantity: Scalar },
}

impl ValidationError {
    /// Classification of this error. Wrapping variants report the kind of
    /// the error they wrap.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyId
            | Self::IdTooLong { .. }
            | Self::ReservedId(_)
            | Self::InvalidIdCharacters(_) => ErrorKind::MalformedIdentifier,
            Self::MissingSecretReference
            | Self::UnexpectedSecretValue { .. }
            | Self::MissingSecretValue
            | Self::UnexpectedSecretReference => ErrorKind::InconsistentSecret,
            Self::MissingVariableSecret { .. }
            | Self::UnexpectedVariableValue { .. }
            | Self::MissingVariableValue { .. }
            | Self::UnexpectedVariableSecret { .. } => ErrorKind::InconsistentEnvironmentVariable,
            Self::UnknownVariableType => ErrorKind::DisallowedEnvironmentVariableKind,
            Self::SecretContainsNullByte { .. } => ErrorKind::NullByteInSecretValue,
            Self::AmbiguousVolume | Self::MissingSourcePayload { .. } => {
                ErrorKind::InconsistentVolumeDiscriminator
            }
            Self::UnknownSourceType => ErrorKind::UnknownVolumeSourceKind,
            Self::FractionalGpus { .. } => ErrorKind::FractionalAcceleratorQuantity,
            Self::InvalidVariableSecret { source, .. } | Self::InvalidVolume { source, .. } => {
                source.kind()
            }
        }
    }

    /// The innermost error, after unwrapping any context added by callers.
    #[must_use]
    pub fn root(&self) -> &ValidationError {
        match self {
            Self::InvalidVariableSecret { source, .. } | Self::InvalidVolume { source, .. } => {
                source.root()
            }
            other => other,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
