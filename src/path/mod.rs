//! Logical path handling
//!
//! Validates caller paths and translates them to native host paths.

pub mod translators;
pub mod validation;

pub use translators::NativePath;
pub use validation::{LogicalPath, ROOT_MARKER, is_valid_path};
