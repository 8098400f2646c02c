//! Standards configuration for commit-guard.
//!
//! This module defines the model of the standards file (YAML): an ordered
//! mapping of standard name to its path rules and its ordered checker
//! declarations. Declaration order is preserved because the first matching
//! standard claims a file. Unknown fields are ignored for forward
//! compatibility.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{CheckerConfig, Standard, StandardsConfig};
pub use operations::resolve_standards_path;
pub use types::CheckerOptions;
