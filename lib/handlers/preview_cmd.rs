//! Manifest preview command handler.

use crate::commands::ManifestArgs;
use crate::error::ExporterResult;

use super::common::{resolve_manifest, resolve_source_dir};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Print the `package.json` that an export would write.
pub fn preview_pkg(path: Option<String>, overrides: &ManifestArgs) -> ExporterResult<()> {
    let dir = resolve_source_dir(path);
    let manifest = resolve_manifest(&dir, overrides)?;
    println!("{}", manifest.to_json_pretty()?);
    Ok(())
}
