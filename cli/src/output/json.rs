//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout, so the output can be piped straight into `jq`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::services::admission::AdmissionReport;
use crate::domain::config::AdmitConfig;

/// Format a JSON error object for a command that failed before producing a
/// verdict (unreadable file, malformed document, bad config).
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render an admission verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_report(report: &AdmissionReport) -> Result<()> {
        println!("{}", format_report(report)?);
        Ok(())
    }

    /// Render the effective configuration and where it lives.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(config: &AdmitConfig, path: &Path) -> Result<()> {
        println!("{}", format_config(config, path)?);
        Ok(())
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(version: &str) -> Result<()> {
        let obj = serde_json::json!({ "version": version });
        println!(
            "{}",
            serde_json::to_string_pretty(&obj).context("JSON serialization failed")?
        );
        Ok(())
    }
}

/// Serialize an admission report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_report(report: &AdmissionReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("JSON serialization failed")
}

/// Serialize the configuration together with its file location.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &AdmitConfig, path: &Path) -> Result<String> {
    let obj = serde_json::json!({
        "path": path.display().to_string(),
        "limits": config.limits,
        "output": config.output,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for a failed command, derived from the error chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if cause.is::<crate::domain::error::ConfigError>() {
            return "invalid_config";
        }
        if cause.is::<std::io::Error>() {
            return "io_error";
        }
        if cause.is::<serde_json::Error>() || cause.is::<serde_yaml::Error>() {
            return "parse_error";
        }
    }
    "error"
}
