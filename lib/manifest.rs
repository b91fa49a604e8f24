//! Package manifest (`package.json`) model.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::MANIFEST_FILE;
use crate::error::ExporterResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Metadata describing a package, serialized as `package.json`.
///
/// Field order here is the serialization order of the manifest file.
/// Dependencies are deliberately not part of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    /// Unique reverse-domain identifier, always lowercase.
    pub name: String,

    /// Human-readable label.
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Semantic version string (SemVer 2.0).
    pub version: String,

    /// Editor compatibility tag.
    pub unity: String,

    /// Free-text description.
    pub description: String,

    /// Search keywords.
    pub keywords: Vec<String>,

    /// Package category.
    pub category: String,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for PackageManifest {
    fn default() -> Self {
        Self {
            name: "com.companyname.packagename".into(),
            display_name: "Package Name".into(),
            version: "0.0.1-prerelease".into(),
            unity: "2018.3".into(),
            description: "This is a sweet package!".into(),
            keywords: vec!["Nice".into()],
            category: "My packages".into(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl PackageManifest {
    /// Load a draft manifest from `package.json` in `dir`.
    ///
    /// Package names are lowercase-only; the name field is folded on load.
    pub fn load(dir: &Path) -> ExporterResult<Self> {
        let content = std::fs::read_to_string(dir.join(MANIFEST_FILE))?;
        let mut manifest: Self = serde_json::from_str(&content)?;
        manifest.name = manifest.name.to_lowercase();
        Ok(manifest)
    }

    /// Load the draft manifest if one exists, otherwise start from placeholder defaults.
    pub fn load_or_default(dir: &Path) -> ExporterResult<Self> {
        if dir.join(MANIFEST_FILE).exists() {
            Self::load(dir)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write `package.json` into `dir`, overwriting any existing file.
    pub fn save(&self, dir: &Path) -> ExporterResult<()> {
        std::fs::write(dir.join(MANIFEST_FILE), self.to_json_pretty()?)?;
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();

        let manifest = PackageManifest {
            name: "com.example.audiotools".into(),
            display_name: "Audio Tools".into(),
            version: "1.2.3".into(),
            unity: "2021.3".into(),
            description: "Helpers for audio pipelines".into(),
            keywords: vec!["audio".into(), "tools".into()],
            category: "Audio".into(),
        };
        manifest.save(dir.path()).unwrap();

        let loaded = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_load_lowercases_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "name": "Com.Example.Pkg", "displayName": "Pkg", "version": "1.0.0" }"#,
        )
        .unwrap();

        let loaded = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.name, "com.example.pkg");
    }

    #[test]
    fn test_serialized_key_order() {
        let json = PackageManifest::default().to_json_pretty().unwrap();
        let keys: Vec<usize> = [
            "\"name\"",
            "\"displayName\"",
            "\"version\"",
            "\"unity\"",
            "\"description\"",
            "\"keywords\"",
            "\"category\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap())
        .collect();

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), r#"{ "name": "com.a.b" }"#).unwrap();

        let loaded = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.name, "com.a.b");
        assert_eq!(loaded.display_name, "Package Name");
    }
}
