//! Shared helpers for command handlers.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::ManifestArgs;
use crate::error::ExporterResult;
use crate::manifest::PackageManifest;
use crate::validate::ValidationReport;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Resolve the source directory argument, defaulting to the current directory.
pub fn resolve_source_dir(path: Option<String>) -> PathBuf {
    path.map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap())
}

/// Build the effective manifest: draft `package.json` if present, placeholder
/// defaults otherwise, with CLI overrides applied on top.
pub fn resolve_manifest(dir: &Path, overrides: &ManifestArgs) -> ExporterResult<PackageManifest> {
    let mut manifest = PackageManifest::load_or_default(dir)?;
    overrides.apply(&mut manifest);
    Ok(manifest)
}

/// Print every failure in a report, one block per failure.
pub fn print_failures(report: &ValidationReport) {
    for failure in &report.failures {
        println!(
            "  {}: → {}",
            format!("error[{}]", failure.code).bright_red().bold(),
            failure.location.bold()
        );

        if let Some(help) = &failure.help {
            println!("      {} {}", "├─".dimmed(), failure.details.dimmed());
            println!(
                "      {} {}: {}",
                "└─".dimmed(),
                "help".bright_green().dimmed(),
                help.dimmed()
            );
        } else {
            println!("      {} {}", "└─".dimmed(), failure.details.dimmed());
        }

        println!();
    }
}

/// Format a failure count for summary lines.
pub fn failure_summary(count: usize) -> String {
    if count == 1 {
        "1 error".to_string()
    } else {
        format!("{} errors", count)
    }
}
