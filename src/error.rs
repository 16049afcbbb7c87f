//! Error types for the fileprune application.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // File system errors
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Deletion aborted after {deleted} file(s): {source}")]
    Delete {
        deleted: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("{0} job(s) failed")]
    JobsFailed(u64),

    // Label errors
    #[error("Malformed label on line {line}: {message}")]
    MalformedLabel { line: usize, message: String },

    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Invalid bounding box: {0}")]
    InvalidBox(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Image errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an IO error that happened while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Error::Io(err),
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const LABEL_ERROR: i32 = 5;
    pub const SOME_JOBS_FAILED: i32 = 6;
}
