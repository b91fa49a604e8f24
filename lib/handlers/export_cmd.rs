//! Package export command handler.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::ManifestArgs;
use crate::constants::DEFAULT_EXPORT_DIR;
use crate::error::{ExporterError, ExporterResult};
use crate::export::export_package;
use crate::rules::RuleConfig;

use super::common::{failure_summary, print_failures, resolve_manifest, resolve_source_dir};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Export a package into a versioned output folder.
pub fn export_pkg(
    path: Option<String>,
    out: Option<String>,
    config: Option<String>,
    overrides: &ManifestArgs,
) -> ExporterResult<()> {
    let dir = resolve_source_dir(path);
    let rules = RuleConfig::discover(&dir, config.as_deref().map(Path::new))?;
    let manifest = resolve_manifest(&dir, overrides)?;

    let export_root = out
        .map(PathBuf::from)
        .unwrap_or_else(|| default_export_root(&dir));

    match export_package(&dir, &manifest, &export_root, &rules) {
        Ok(result) => {
            println!(
                "  {} Exported {} {}",
                "✓".bright_green(),
                manifest.display_name.bold(),
                format!("({} files)", result.file_count).dimmed()
            );
            println!("    {}", result.output_path.display().to_string().bright_green());
            Ok(())
        }
        Err(ExporterError::ValidationFailed(report)) => {
            println!("  {} Validation failed\n", "✗".bright_red());
            print_failures(&report);
            println!(
                "  {} {}",
                "✗".bright_red(),
                failure_summary(report.failures.len())
            );
            println!("\n  Cannot export an invalid package. Fix the errors and retry.");
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

/// By default exports land in an `ExportedPackages` folder beside the
/// package directory.
fn default_export_root(dir: &Path) -> PathBuf {
    dir.parent()
        .map(|p| p.join(DEFAULT_EXPORT_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
}
