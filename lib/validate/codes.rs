//! Validation failure codes.

use serde::Serialize;
use std::fmt;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validation failure codes.
///
/// Every failing check reports one of these; a package is exportable only
/// when no code is reported at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationCode {
    /// E001: The source directory has no shippable files.
    #[serde(rename = "E001")]
    EmptyPackage,

    /// E002: The manifest name is blank.
    #[serde(rename = "E002")]
    InvalidName,

    /// E003: The manifest display name is blank.
    #[serde(rename = "E003")]
    InvalidDisplayName,

    /// E004: The manifest version is not valid SemVer 2.0.
    #[serde(rename = "E004")]
    InvalidVersion,

    /// E005: The source directory contains a disallowed asset type.
    #[serde(rename = "E005")]
    DisallowedAssetPresent,

    /// E006: Script files are present without a module descriptor.
    #[serde(rename = "E006")]
    MissingModuleDescriptor,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ValidationCode::EmptyPackage => "E001",
            ValidationCode::InvalidName => "E002",
            ValidationCode::InvalidDisplayName => "E003",
            ValidationCode::InvalidVersion => "E004",
            ValidationCode::DisallowedAssetPresent => "E005",
            ValidationCode::MissingModuleDescriptor => "E006",
        };
        write!(f, "{}", code)
    }
}
