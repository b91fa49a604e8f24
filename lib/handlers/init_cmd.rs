//! Draft manifest creation command handler.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::ManifestArgs;
use crate::constants::MANIFEST_FILE;
use crate::error::ExporterResult;
use crate::manifest::PackageManifest;

use super::common::resolve_source_dir;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// What `init` did with the draft manifest.
#[derive(Debug, PartialEq)]
pub enum InitOutcome {
    /// The draft was written (fresh, or overwritten with `--force`).
    Created(PathBuf),

    /// A draft already exists and `--force` was not given; nothing written.
    AlreadyExists(PathBuf),
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Create a draft `package.json` with placeholder defaults.
pub fn init_pkg(path: Option<String>, force: bool, overrides: &ManifestArgs) -> ExporterResult<()> {
    let dir = resolve_source_dir(path);

    match write_draft_manifest(&dir, force, overrides)? {
        InitOutcome::AlreadyExists(manifest_path) => {
            println!(
                "  {} {} already exists (use --force to overwrite)",
                "✗".bright_red(),
                manifest_path.display()
            );
            std::process::exit(1);
        }
        InitOutcome::Created(manifest_path) => {
            println!(
                "  {} Created {}",
                "✓".bright_green(),
                manifest_path.display().to_string().bright_green()
            );
            println!("  Edit the draft, then run `pkgexport validate`.");
            Ok(())
        }
    }
}

/// Write the draft manifest into `dir`, creating the directory if needed.
/// An existing draft is only replaced when `force` is set.
pub fn write_draft_manifest(
    dir: &Path,
    force: bool,
    overrides: &ManifestArgs,
) -> ExporterResult<InitOutcome> {
    std::fs::create_dir_all(dir)?;

    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() && !force {
        return Ok(InitOutcome::AlreadyExists(manifest_path));
    }

    let mut manifest = PackageManifest::default();
    overrides.apply(&mut manifest);
    manifest.save(dir)?;

    Ok(InitOutcome::Created(manifest_path))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
