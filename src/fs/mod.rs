//! Filesystem module.
//!
//! Provides:
//! - Directory listings with extension filtering
//! - Stem and extension manipulation of filenames
//! - Path building and fail-fast deletion

pub mod delete;
pub mod listing;
pub mod naming;
pub mod paths;

/// Bare filenames, in the order they were produced.
pub type FileSet = Vec<String>;

pub use delete::delete_files;
pub use listing::{list_directory, list_directory_with_extension};
pub use naming::{expand_with_extensions, has_extension, normalize_case, stem, strip_stems};
pub use paths::entry_path;
