//! Package validation.

mod checks;
mod codes;
mod result;

#[cfg(test)]
mod tests;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use checks::{is_valid_semver, validate_package};
pub use codes::ValidationCode;
pub use result::{ValidationFailure, ValidationReport};
