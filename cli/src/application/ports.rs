//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::AdmitConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Serialization format of an entity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file name: `.yaml`/`.yml` is YAML, anything
    /// else is JSON.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

/// Raw entity document as read from its source, not yet deserialized.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document came from, for messages (`-` for stdin).
    pub origin: String,
    pub format: DocumentFormat,
    pub text: String,
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Loads and persists the admit configuration file.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<AdmitConfig>;

    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &AdmitConfig) -> Result<()>;

    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Document Port ─────────────────────────────────────────────────────────────

/// Reads entity documents submitted for admission.
pub trait DocumentSource {
    /// Read the document at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    fn read(&self, location: &str) -> Result<Document>;
}
