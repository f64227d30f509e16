//! Application context — unified state passed to every command handler.
//!
//! Constructed once per invocation from the top-level flags and the loaded
//! configuration file.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AdmitConfig, Limits};
use crate::infra::{FsDocumentSource, YamlConfigStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Explicit configuration file (`--config`).
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// Where entity documents are read from.
    pub documents: FsDocumentSource,
    /// Configuration as loaded at startup.
    pub config: AdmitConfig,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// `--json` forces JSON output; otherwise `output.format` decides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let config_store = YamlConfigStore::new(flags.config.clone());
        let config = config_store.load()?;

        let mode = if flags.json || config.prefers_json() {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config_store,
            documents: FsDocumentSource,
            config,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Validation limits from the loaded configuration.
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.config.limits
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
