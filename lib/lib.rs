//! `pkgexport-cli` library.

pub mod commands;
pub mod constants;
pub mod error;
pub mod export;
pub mod handlers;
pub mod manifest;
pub mod rules;
pub mod styles;
pub mod validate;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use export::*;
pub use handlers::*;
pub use manifest::*;
pub use rules::*;
pub use validate::*;
