//! Validation tests.

use super::checks::{is_valid_semver, validate_package};
use super::codes::ValidationCode;
use crate::manifest::PackageManifest;
use crate::rules::RuleConfig;
use tempfile::TempDir;

fn valid_manifest() -> PackageManifest {
    PackageManifest {
        name: "com.example.pkg".into(),
        display_name: "Example Package".into(),
        version: "1.0.0".into(),
        ..PackageManifest::default()
    }
}

#[test]
fn test_valid_semver() {
    // Valid
    assert!(is_valid_semver("1.2.3"));
    assert!(is_valid_semver("0.2.5-prerelease"));
    assert!(is_valid_semver("1.0.0+build.1"));
    assert!(is_valid_semver("1.0.0-alpha.1+exp.sha-5114f85"));
    assert!(is_valid_semver("0.0.1"));

    // Invalid - wrong shape
    assert!(!is_valid_semver("1.2"));
    assert!(!is_valid_semver("v1.2.3"));
    assert!(!is_valid_semver("1.2.3-"));
    assert!(!is_valid_semver("1.2.3."));
    assert!(!is_valid_semver(""));

    // Invalid - leading zeros
    assert!(!is_valid_semver("01.2.3"));
    assert!(!is_valid_semver("1.02.3"));
    assert!(!is_valid_semver("1.2.3-01"));
}

#[test]
fn test_empty_directory_reports_empty_package() {
    let dir = TempDir::new().unwrap();
    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());

    assert!(!report.is_valid());
    assert!(report.has(ValidationCode::EmptyPackage));
}

#[test]
fn test_exporter_artifacts_do_not_count_as_content() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();
    std::fs::write(dir.path().join("pkgexport.toml"), "").unwrap();

    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(report.has(ValidationCode::EmptyPackage));

    // A single non-artifact file removes the failure
    std::fs::write(dir.path().join("Readme.md"), "hello").unwrap();
    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(!report.has(ValidationCode::EmptyPackage));
    assert!(report.is_valid());
}

#[test]
fn test_asset_files_count_as_content() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("GameSettings.asset"), "yaml").unwrap();
    std::fs::write(dir.path().join("GameSettings.asset.meta"), "meta").unwrap();

    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(!report.has(ValidationCode::EmptyPackage));
    assert!(report.is_valid());
}

#[test]
fn test_nested_artifact_names_count_as_content() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("Samples")).unwrap();
    std::fs::write(dir.path().join("Samples/package.json"), "{}").unwrap();

    let rules = RuleConfig {
        exporter_artifact_patterns: vec!["*.asset".into()],
        ..RuleConfig::default()
    };
    let report = validate_package(dir.path(), &valid_manifest(), &rules);
    assert!(!report.has(ValidationCode::EmptyPackage));
}

#[test]
fn test_missing_directory_reports_empty_package() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let report = validate_package(&missing, &valid_manifest(), &RuleConfig::default());
    assert!(report.has(ValidationCode::EmptyPackage));
}

#[test]
fn test_blank_name() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    let mut manifest = valid_manifest();
    manifest.name = "   ".into();

    let report = validate_package(dir.path(), &manifest, &RuleConfig::default());
    assert!(report.has(ValidationCode::InvalidName));

    manifest.name = "com.example.pkg".into();
    let report = validate_package(dir.path(), &manifest, &RuleConfig::default());
    assert!(!report.has(ValidationCode::InvalidName));
}

#[test]
fn test_blank_display_name() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    let mut manifest = valid_manifest();
    manifest.display_name = "".into();

    let report = validate_package(dir.path(), &manifest, &RuleConfig::default());
    assert!(report.has(ValidationCode::InvalidDisplayName));
}

#[test]
fn test_invalid_version() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    let mut manifest = valid_manifest();
    manifest.version = "not-semver".into();

    let report = validate_package(dir.path(), &manifest, &RuleConfig::default());
    assert!(report.has(ValidationCode::InvalidVersion));
}

#[test]
fn test_disallowed_asset_present() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("Sounds")).unwrap();
    std::fs::write(dir.path().join("Sounds/clip.wav"), "RIFF").unwrap();

    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(report.has(ValidationCode::DisallowedAssetPresent));
}

#[test]
fn test_scripts_require_module_descriptor() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("Runtime")).unwrap();
    std::fs::write(dir.path().join("Runtime/Thing.cs"), "class Thing {}").unwrap();

    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(report.has(ValidationCode::MissingModuleDescriptor));

    std::fs::write(dir.path().join("Runtime/Package.asmdef"), "{}").unwrap();
    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(!report.has(ValidationCode::MissingModuleDescriptor));
}

#[test]
fn test_no_scripts_never_requires_descriptor() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("texture.png"), "png").unwrap();

    let report = validate_package(dir.path(), &valid_manifest(), &RuleConfig::default());
    assert!(!report.has(ValidationCode::MissingModuleDescriptor));
    assert!(report.is_valid());
}

#[test]
fn test_failures_accumulate_without_short_circuit() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("clip.ogg"), "OggS").unwrap();
    std::fs::write(dir.path().join("Script.cs"), "class S {}").unwrap();

    let manifest = PackageManifest {
        name: "".into(),
        display_name: "".into(),
        version: "1.2".into(),
        ..PackageManifest::default()
    };

    let report = validate_package(dir.path(), &manifest, &RuleConfig::default());
    assert_eq!(
        report.codes(),
        vec![
            ValidationCode::InvalidName,
            ValidationCode::InvalidDisplayName,
            ValidationCode::InvalidVersion,
            ValidationCode::DisallowedAssetPresent,
            ValidationCode::MissingModuleDescriptor,
        ]
    );
}

#[test]
fn test_custom_rules_override_extensions() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("main.lua"), "print('hi')").unwrap();

    let rules = RuleConfig {
        script_extensions: vec!["lua".into()],
        descriptor_extensions: vec!["mod".into()],
        ..RuleConfig::default()
    };

    let report = validate_package(dir.path(), &valid_manifest(), &rules);
    assert!(report.has(ValidationCode::MissingModuleDescriptor));

    std::fs::write(dir.path().join("init.mod"), "{}").unwrap();
    let report = validate_package(dir.path(), &valid_manifest(), &rules);
    assert!(report.is_valid());
}
