//! Error types for pkgexport-cli.

use thiserror::Error;

use crate::validate::ValidationReport;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for pkgexport-cli operations.
pub type ExporterResult<T> = Result<T, ExporterError>;

/// Error type for pkgexport-cli operations.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// The package failed validation; nothing was exported.
    #[error("Validation failed")]
    ValidationFailed(ValidationReport),

    /// The export root sits inside the source directory; the copy would
    /// recurse into its own output.
    #[error("Export root {0} is inside the source directory")]
    ExportRootInsideSource(std::path::PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rule configuration parse error.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Walkdir error.
    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path strip error.
    #[error("Path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}
