//! Constants for pkgexport-cli.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The manifest file name written into every exported package.
pub const MANIFEST_FILE: &str = "package.json";

/// Optional rule configuration file looked up beside the source assets.
pub const RULES_FILE: &str = "pkgexport.toml";

/// Directory name used for the default export root.
pub const DEFAULT_EXPORT_DIR: &str = "ExportedPackages";

/// Zero-padded width of the per-version build number folder.
pub const EXPORT_NUMBER_WIDTH: usize = 4;
