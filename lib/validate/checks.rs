//! Package validation checks.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::manifest::PackageManifest;
use crate::rules::RuleConfig;

use super::codes::ValidationCode;
use super::result::{ValidationFailure, ValidationReport};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

// SemVer 2.0: no leading zeros in numeric identifiers, dot-separated
// prerelease identifiers, free-form build metadata identifiers.
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("valid semver pattern")
});

/// How many offending files to list in failure details.
const MAX_LISTED_FILES: usize = 5;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A file found under the source directory.
struct FileEntry {
    /// File name without path.
    name: String,
    /// Lowercased extension, empty when absent.
    extension: String,
    /// Path relative to the source directory.
    relative: String,
    /// Whether the file sits directly in the source directory.
    top_level: bool,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a package directory and its manifest draft.
///
/// All checks run and failures accumulate; nothing short-circuits. An empty
/// report means the package is ready for export.
pub fn validate_package(
    dir: &Path,
    manifest: &PackageManifest,
    rules: &RuleConfig,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let files = collect_files(dir);

    check_has_files(dir, &files, rules, &mut report);
    check_name(manifest, &mut report);
    check_display_name(manifest, &mut report);
    check_version(manifest, &mut report);
    check_disallowed_assets(&files, rules, &mut report);
    check_module_descriptor(&files, rules, &mut report);

    report
}

/// Whether `version` matches the SemVer 2.0 grammar.
pub fn is_valid_semver(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}

/// Enumerate all files under `dir`. A missing directory yields no files and
/// is reported by the NonEmpty check.
fn collect_files(dir: &Path) -> Vec<FileEntry> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| FileEntry {
            name: e.file_name().to_string_lossy().into_owned(),
            extension: e
                .path()
                .extension()
                .map(|x| x.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_default(),
            relative: e
                .path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .display()
                .to_string(),
            top_level: e.depth() == 1,
        })
        .collect()
}

/// NonEmpty: at least one file besides the exporter's own artifacts.
/// Artifacts only live at the package root; nested files always count.
fn check_has_files(
    dir: &Path,
    files: &[FileEntry],
    rules: &RuleConfig,
    report: &mut ValidationReport,
) {
    let has_content = files
        .iter()
        .any(|f| !(f.top_level && rules.is_exporter_artifact(&f.name)));
    if !has_content {
        report.failures.push(ValidationFailure {
            code: ValidationCode::EmptyPackage,
            message: "package is empty".into(),
            location: dir.display().to_string(),
            details: "no files found besides exporter artifacts".into(),
            help: Some("add at least one asset to the package directory".into()),
        });
    }
}

fn check_name(manifest: &PackageManifest, report: &mut ValidationReport) {
    if manifest.name.trim().is_empty() {
        report.failures.push(ValidationFailure {
            code: ValidationCode::InvalidName,
            message: "empty name is not valid".into(),
            location: "package.json:name".into(),
            details: "`name` must be non-blank".into(),
            help: Some("use a reverse-domain identifier like com.example.mypackage".into()),
        });
    }
}

fn check_display_name(manifest: &PackageManifest, report: &mut ValidationReport) {
    if manifest.display_name.trim().is_empty() {
        report.failures.push(ValidationFailure {
            code: ValidationCode::InvalidDisplayName,
            message: "empty display name is not valid".into(),
            location: "package.json:displayName".into(),
            details: "`displayName` must be non-blank".into(),
            help: None,
        });
    }
}

fn check_version(manifest: &PackageManifest, report: &mut ValidationReport) {
    if !is_valid_semver(&manifest.version) {
        report.failures.push(ValidationFailure {
            code: ValidationCode::InvalidVersion,
            message: "semantic version is not valid".into(),
            location: "package.json:version".into(),
            details: format!("`{}` is not a valid semantic version", manifest.version),
            help: Some("use MAJOR.MINOR.PATCH, e.g. 1.2.3 or 0.2.5-prerelease".into()),
        });
    }
}

/// NoDisallowedAssetTypes: the editor cannot import these from a package.
fn check_disallowed_assets(
    files: &[FileEntry],
    rules: &RuleConfig,
    report: &mut ValidationReport,
) {
    let offenders: Vec<&str> = files
        .iter()
        .filter(|f| rules.is_disallowed_extension(&f.extension))
        .map(|f| f.relative.as_str())
        .collect();

    if !offenders.is_empty() {
        let mut listed = offenders
            .iter()
            .take(MAX_LISTED_FILES)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if offenders.len() > MAX_LISTED_FILES {
            listed.push_str(&format!(" (and {} more)", offenders.len() - MAX_LISTED_FILES));
        }

        report.failures.push(ValidationFailure {
            code: ValidationCode::DisallowedAssetPresent,
            message: "disallowed asset type present".into(),
            location: "package contents".into(),
            details: format!("these files cannot be imported from a package: {}", listed),
            help: Some("remove the files or deliver them outside the package".into()),
        });
    }
}

/// ScriptsRequireManifestDescriptor: trivially passes when no scripts exist.
fn check_module_descriptor(
    files: &[FileEntry],
    rules: &RuleConfig,
    report: &mut ValidationReport,
) {
    let has_scripts = files.iter().any(|f| rules.is_script_extension(&f.extension));
    if !has_scripts {
        return;
    }

    let has_descriptor = files
        .iter()
        .any(|f| rules.is_descriptor_extension(&f.extension));
    if !has_descriptor {
        report.failures.push(ValidationFailure {
            code: ValidationCode::MissingModuleDescriptor,
            message: "scripts without a module descriptor".into(),
            location: "package contents".into(),
            details: "script files are present but no module descriptor file was found".into(),
            help: Some("add a module descriptor (e.g. an .asmdef file) beside the scripts".into()),
        });
    }
}
