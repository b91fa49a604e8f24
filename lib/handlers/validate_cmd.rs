//! Package validation command handler.

use colored::Colorize;
use std::path::Path;

use crate::commands::ManifestArgs;
use crate::error::ExporterResult;
use crate::rules::RuleConfig;
use crate::validate::{ValidationReport, validate_package};

use super::common::{failure_summary, print_failures, resolve_manifest, resolve_source_dir};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a package directory.
pub fn validate_pkg(
    path: Option<String>,
    json_output: bool,
    quiet: bool,
    config: Option<String>,
    overrides: &ManifestArgs,
) -> ExporterResult<()> {
    let dir = resolve_source_dir(path);
    let rules = RuleConfig::discover(&dir, config.as_deref().map(Path::new))?;
    let manifest = resolve_manifest(&dir, overrides)?;

    let report = validate_package(&dir, &manifest, &rules);

    if json_output {
        output_json(&report)?;
    } else if quiet {
        output_quiet(&report);
    } else {
        output_full(&dir, &report);
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

/// Output validation result as JSON.
fn output_json(report: &ValidationReport) -> ExporterResult<()> {
    let output = serde_json::json!({
        "valid": report.is_valid(),
        "failures": report.failures,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output validation result in quiet mode.
fn output_quiet(report: &ValidationReport) {
    for failure in &report.failures {
        println!(
            "  {}: {}: {}",
            format!("error[{}]", failure.code).bright_red(),
            failure.message,
            failure.details
        );
    }
}

/// Output validation result in full format.
fn output_full(dir: &Path, report: &ValidationReport) {
    println!("  Validating {}\n", dir.display().to_string().bold());

    print_failures(report);

    if report.is_valid() {
        println!("  {} ready for export", "✓".bright_green());
    } else {
        println!(
            "  {} {}",
            "✗".bright_red(),
            failure_summary(report.failures.len())
        );
    }
}
