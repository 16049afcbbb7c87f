//! fileprune - reconcile file sets across folders.
//!
//! This library deletes files in a target folder based on the stems of files
//! in a source folder, and carries a few helpers for VOC box label files.
//!
//! # Features
//!
//! - Folder listings filtered by extension (case-insensitive)
//! - Keep-list mode: delete exactly the derived names
//! - Complement mode: delete everything except the derived names
//! - Dry-run plans
//! - VOC label parsing, class indices and box drawing
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fileprune::{reconcile_complement, Options};
//!
//! fn main() -> fileprune::Result<()> {
//!     // Remove RAW files whose JPG was culled
//!     let deleted = reconcile_complement(
//!         Path::new("photos"),
//!         "jpg",
//!         Path::new("photos/Raw"),
//!         &["orf"],
//!         &Options::default(),
//!     )?;
//!     println!("deleted {deleted} files");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod labels;
pub mod output;
pub mod reconcile;

// Re-exports for convenience
pub use config::{Config, Options, PathStyle, ReconcileMode};
pub use error::{Error, Result};
pub use fs::{
    delete_files, expand_with_extensions, list_directory, list_directory_with_extension,
    normalize_case, strip_stems, FileSet,
};
pub use labels::{labels_to_classes, read_voc_file, BoundingBox, ClassMap, VocAnnotations};
pub use reconcile::{plan_complement, plan_keep_list, reconcile_complement, reconcile_keep_list};
