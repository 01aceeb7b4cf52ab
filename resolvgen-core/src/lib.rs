//! Core utilities and types for the resolvgen aggregator generator.
//!
//! This crate provides the filesystem collaborators (directory listing,
//! directory creation, file writing) and the filename transformations
//! shared by the code generator.

mod file;
mod listing;
mod naming;

// File operations
pub use file::{File, GeneratedFile, ensure_dir, write_file};
// Directory listing
pub use listing::list_entries;
// Filename transformations
pub use naming::{SOURCE_SUFFIX, binding_identifier, import_path};
