//! Domain types and validators for admit configuration.
//!
//! Pure functions only — no I/O, no filesystem access.

use admit_types::os::NAME_MAX;
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["limits.name_max", "output.format"];
pub const VALID_OUTPUT_FORMATS: &[&str] = &["human", "json"];

/// Largest accepted `limits.name_max`; `PATH_MAX` on Linux.
pub const NAME_MAX_CEILING: usize = 4096;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.admit/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdmitConfig {
    /// Limits applied by validators that take them.
    pub limits: Limits,
    /// Output settings.
    pub output: OutputConfig,
}

/// Validation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum identifier length in bytes. Defaults to the host's `NAME_MAX`;
    /// set it to validate for agents on another platform.
    #[serde(default = "default_name_max")]
    pub name_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name_max: default_name_max(),
        }
    }
}

fn default_name_max() -> usize {
    NAME_MAX
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format: `human` (default) or `json`.
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> String {
    "human".to_string()
}

impl AdmitConfig {
    /// Returns `true` when the configured report format is JSON.
    #[must_use]
    pub fn prefers_json(&self) -> bool {
        self.output.format == "json"
    }

    /// Checks every field against the rules `config set` enforces.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range or unknown value.
    pub fn validate(&self) -> Result<()> {
        validate_config_value("limits.name_max", &self.limits.name_max.to_string())?;
        validate_config_value("output.format", &self.output.format)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "limits.name_max" => {
            parse_name_max(value)?;
        }
        "output.format" if !VALID_OUTPUT_FORMATS.contains(&value) => {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: VALID_OUTPUT_FORMATS.join(", "),
            }
            .into());
        }
        _ => {}
    }
    Ok(())
}

/// Validates `key`/`value` and stores the value in `config`.
///
/// # Errors
///
/// Returns an error if the key is unknown or the value is invalid.
pub fn apply_config_value(config: &mut AdmitConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "limits.name_max" => config.limits.name_max = parse_name_max(value)?,
        "output.format" => config.output.format = value.to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

fn parse_name_max(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if (1..=NAME_MAX_CEILING).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key: "limits.name_max".to_string(),
            value: value.to_string(),
            valid: format!("an integer from 1 to {NAME_MAX_CEILING}"),
        }
        .into()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
