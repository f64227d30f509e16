//! `admit check` — validate one entity document.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::admission::{self, EntityKind};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Kind of entity the document holds
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// JSON or YAML document (`.yaml`/`.yml` selects YAML); `-` reads JSON from stdin
    pub path: String,
}

/// Run the check command. Exit code 0 when admitted, 1 when rejected.
///
/// # Errors
///
/// Returns an error if the document cannot be read or decoded.
pub fn run(app: &AppContext, args: &CheckArgs) -> Result<ExitCode> {
    let report = admission::check_location(&app.documents, &args.path, args.kind, &app.limits())?;
    app.renderer().render_report(&report)?;
    Ok(if report.admitted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
