//! CLI command handlers.

mod common;
mod export_cmd;
mod init_cmd;
mod preview_cmd;
mod validate_cmd;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use export_cmd::export_pkg;
pub use init_cmd::{init_pkg, write_draft_manifest, InitOutcome};
pub use preview_cmd::preview_pkg;
pub use validate_cmd::validate_pkg;
