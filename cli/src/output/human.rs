//! Human-readable terminal renderer.

use std::path::Path;

use admit_types::os::NAME_MAX;
use owo_colors::OwoColorize as _;

use crate::application::services::admission::AdmissionReport;
use crate::domain::config::AdmitConfig;
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render an admission verdict. Rejections go to stderr and are never
    /// suppressed; acceptances respect `--quiet`.
    pub fn render_report(&self, report: &AdmissionReport) {
        match &report.error {
            None => self
                .ctx
                .success(&format!("{} admitted ({})", report.kind, report.origin)),
            Some(rejection) => {
                self.ctx
                    .error(&format!("{} rejected ({})", report.kind, report.origin));
                eprintln!(
                    "    {}  {}",
                    rejection.kind.as_str().style(self.ctx.styles.dim),
                    rejection.message
                );
            }
        }
    }

    /// Render the current admit configuration.
    pub fn render_config(&self, config: &AdmitConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "limits.name_max:", config.limits.name_max);
        println!("  {:<20} {}", "output.format:", config.output.format);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "RUST_LOG:",
            std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }

    /// Confirm a `config set`, warning when the identifier limit is larger
    /// than this host allows.
    pub fn render_config_set(&self, key: &str, value: &str, config: &AdmitConfig) {
        self.ctx.success(&format!("Set {key} = {value}"));
        if key == "limits.name_max" && config.limits.name_max > NAME_MAX {
            self.ctx.warn(&format!(
                "limits.name_max exceeds this host's NAME_MAX ({NAME_MAX})"
            ));
        }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("admit {version}");
    }
}
