//! Declaration file loading, parsing, and resolution.
//!
//! # Modules
//!
//! - [`schema`] - Struct definitions mapping to the YAML declaration format
//! - [`loader`] - File loading and probe resolution

pub mod loader;
pub mod schema;

pub use loader::{load_declarations, load_descriptors, resolve_descriptors};
pub use schema::{CheckDecl, Declarations, ProbeDecl};
