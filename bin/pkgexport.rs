//! `pkgexport` is the CLI binary.

use clap::Parser;
use colored::Colorize;
use pkgexport_cli::handlers;
use pkgexport_cli::{Cli, Command, ExporterError, ExporterResult};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn main() {
    // Initialize tracing - only enable when RUST_LOG is set.
    init_tracing();

    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &ExporterError) {
    println!();
    match e {
        ExporterError::ValidationFailed(report) => {
            println!("  {} Validation failed", "error".bright_red().bold());
            println!();
            for failure in &report.failures {
                println!(
                    "    {} → {}",
                    format!("error[{}]", failure.code).bright_red(),
                    failure.location
                );
                println!("      {}", failure.message);
            }
        }
        ExporterError::ConfigParse(err) => {
            println!(
                "  {} Invalid rule configuration",
                "error".bright_red().bold()
            );
            println!();
            println!("    {}", err);
        }
        _ => {
            println!("  {} {}", "error".bright_red().bold(), e);
        }
    }
    println!();
}

/// Initialize tracing. Only enables logging when RUST_LOG is set.
fn init_tracing() {
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();

    // Without a subscriber, all tracing events are discarded.
    if !rust_log_set {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> ExporterResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate {
            path,
            json,
            quiet,
            config,
            manifest,
        } => handlers::validate_pkg(path, json, quiet, config, &manifest),

        Command::Export {
            path,
            out,
            config,
            manifest,
        } => handlers::export_pkg(path, out, config, &manifest),

        Command::Preview { path, manifest } => handlers::preview_pkg(path, &manifest),

        Command::Init {
            path,
            force,
            manifest,
        } => handlers::init_pkg(path, force, &manifest),
    }
}
