//! Configurable validation rule sets.
//!
//! The extension and pattern lists below are tied to a specific editor's
//! import pipeline, so they are configuration rather than hardcoded checks.
//! Defaults match the Unity Package Manager conventions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::constants::{MANIFEST_FILE, RULES_FILE};
use crate::error::ExporterResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Extension and pattern sets driving the package checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// File extensions the editor cannot import from a package.
    pub disallowed_extensions: Vec<String>,

    /// Script extensions that require a module descriptor alongside them.
    pub script_extensions: Vec<String>,

    /// Module descriptor extensions.
    pub descriptor_extensions: Vec<String>,

    /// Name patterns of additional exporter artifacts at the package root.
    /// The draft `package.json` and the rule file are always treated as
    /// artifacts; patterns only matter for exporters that keep descriptor
    /// files of their own beside the assets. Matching is top-level only —
    /// nested files are package content.
    pub exporter_artifact_patterns: Vec<String>,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            disallowed_extensions: ["wav", "mp3", "ogg", "aiff", "flac"]
                .map(String::from)
                .to_vec(),
            script_extensions: vec!["cs".into()],
            descriptor_extensions: vec!["asmdef".into()],
            exporter_artifact_patterns: Vec::new(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl RuleConfig {
    /// Load rule configuration from a TOML file.
    pub fn load(path: &Path) -> ExporterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the rule configuration for a source directory.
    ///
    /// An explicit `--config` path wins, then a `pkgexport.toml` beside the
    /// assets, then the built-in defaults.
    pub fn discover(source_dir: &Path, explicit: Option<&Path>) -> ExporterResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = source_dir.join(RULES_FILE);
        if local.exists() {
            return Self::load(&local);
        }

        Ok(Self::default())
    }

    /// Whether files with this extension may not appear in a package.
    pub fn is_disallowed_extension(&self, ext: &str) -> bool {
        self.disallowed_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether this extension marks a script/source file.
    pub fn is_script_extension(&self, ext: &str) -> bool {
        self.script_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether this extension marks a module descriptor.
    pub fn is_descriptor_extension(&self, ext: &str) -> bool {
        self.descriptor_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether a top-level file belongs to the exporter itself.
    ///
    /// Exporter artifacts are excluded from the package content count and
    /// stripped from the exported tree; callers apply this to root-level
    /// file names only. The draft manifest and the rule file always count
    /// as artifacts; the serialized manifest is regenerated on export.
    pub fn is_exporter_artifact(&self, file_name: &str) -> bool {
        if file_name == MANIFEST_FILE || file_name == RULES_FILE {
            return true;
        }

        self.exporter_artifact_patterns
            .iter()
            .any(|pattern| match glob::Pattern::new(pattern) {
                Ok(p) => p.matches(file_name),
                Err(e) => {
                    warn!("ignoring invalid artifact pattern `{}`: {}", pattern, e);
                    false
                }
            })
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
