//! admit - admission-time validation for cluster resource objects

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use admit_cli::cli::Cli;
use admit_cli::output::json;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            if json_mode {
                match json::format_error(&format!("{e:#}"), json::error_code(&e)) {
                    Ok(text) => println!("{text}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
