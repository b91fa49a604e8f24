//! Validation result types.

use serde::Serialize;

use super::codes::ValidationCode;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Accumulated validation failures for one package.
///
/// Checks never short-circuit; every problem is reported in one pass so a
/// caller fixing one field immediately sees the remaining ones.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Validation failures in check order.
    pub failures: Vec<ValidationFailure>,
}

/// A single validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailure {
    /// Failure code.
    pub code: ValidationCode,

    /// Short description (e.g., "package is empty").
    pub message: String,

    /// Location of the problem (a manifest field or the source directory).
    pub location: String,

    /// Detailed explanation.
    pub details: String,

    /// Optional help suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ValidationReport {
    /// Returns true if there are no failures.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Codes of all reported failures, in check order.
    pub fn codes(&self) -> Vec<ValidationCode> {
        self.failures.iter().map(|f| f.code).collect()
    }

    /// Whether a specific failure code was reported.
    pub fn has(&self, code: ValidationCode) -> bool {
        self.failures.iter().any(|f| f.code == code)
    }
}
