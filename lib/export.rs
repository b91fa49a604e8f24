//! Versioned package export.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::EXPORT_NUMBER_WIDTH;
use crate::error::{ExporterError, ExporterResult};
use crate::manifest::PackageManifest;
use crate::rules::RuleConfig;
use crate::validate::validate_package;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result of a successful export.
#[derive(Debug)]
pub struct ExportResult {
    /// Absolute path of the exported package directory.
    pub output_path: PathBuf,

    /// Number of files in the exported package, including `package.json`.
    pub file_count: usize,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Export a validated package directory into a versioned output folder.
///
/// Layout: `export_root/<displayName>/<version>/<NNNN>/<name>/` where `NNNN`
/// is a zero-padded build number, recomputed on every call by scanning the
/// existing numeric subfolders. A deleted build's number can be reused.
///
/// The copy is not transactional: an I/O failure mid-copy halts the export
/// and leaves whatever was already copied in place.
pub fn export_package(
    source_dir: &Path,
    manifest: &PackageManifest,
    export_root: &Path,
    rules: &RuleConfig,
) -> ExporterResult<ExportResult> {
    // Re-validate here rather than trusting an earlier check; the source
    // tree may have changed in between. Nothing is written under the export
    // root when validation fails.
    let report = validate_package(source_dir, manifest, rules);
    if !report.is_valid() {
        return Err(ExporterError::ValidationFailed(report));
    }

    // An export root under the source would make copy_tree descend into
    // the output it is writing.
    let source_abs = std::path::absolute(source_dir)?;
    let root_abs = std::path::absolute(export_root)?;
    if root_abs.starts_with(&source_abs) {
        return Err(ExporterError::ExportRootInsideSource(
            export_root.to_path_buf(),
        ));
    }

    let versions_dir = export_root
        .join(&manifest.display_name)
        .join(&manifest.version);
    fs::create_dir_all(&versions_dir)?;

    let build_dir = claim_build_dir(&versions_dir)?;
    let output_dir = build_dir.join(&manifest.name);
    fs::create_dir(&output_dir)?;

    let copied = copy_tree(source_dir, &output_dir)?;
    let removed = strip_exporter_artifacts(&output_dir, rules)?;

    // The serialized manifest replaces any draft that was copied along.
    manifest.save(&output_dir)?;

    let output_path = output_dir.canonicalize()?;
    debug!(
        "exported {} {} to {}",
        manifest.display_name,
        manifest.version,
        output_path.display()
    );

    Ok(ExportResult {
        output_path,
        file_count: copied - removed + 1,
    })
}

/// Create the next numbered build directory under `versions_dir`.
///
/// Creation is exclusive: when another export claims the same number first,
/// the next one is tried.
fn claim_build_dir(versions_dir: &Path) -> ExporterResult<PathBuf> {
    let mut next = next_build_number(versions_dir)?;
    loop {
        let candidate = versions_dir.join(format!("{:0width$}", next, width = EXPORT_NUMBER_WIDTH));
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => next += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Highest existing numeric subdirectory plus one, or 1 when none exist.
fn next_build_number(versions_dir: &Path) -> ExporterResult<u64> {
    let mut max = 0;
    for entry in fs::read_dir(versions_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(n) = entry
            .file_name()
            .to_str()
            .and_then(|s| s.parse::<u64>().ok())
        {
            max = max.max(n);
        }
    }
    Ok(max + 1)
}

/// Recursively copy `source` into `target`, preserving relative structure.
/// Returns the number of files copied.
fn copy_tree(source: &Path, target: &Path) -> ExporterResult<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let path = entry.path();
        if path == source {
            continue;
        }

        let destination = target.join(path.strip_prefix(source)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)?;
        } else {
            fs::copy(path, &destination)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Delete exporter artifacts that were copied along with the assets.
/// Only the package root is scanned; nested files are package content.
/// Returns the number of files removed.
fn strip_exporter_artifacts(output_dir: &Path, rules: &RuleConfig) -> ExporterResult<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if rules.is_exporter_artifact(&entry.file_name().to_string_lossy()) {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
