//! Configuration module for fileprune.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Reconcile mode and path style definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{user_config_path, Config, JobConfig, LabelsConfig, Options, CONFIG_FILE_NAME};
pub use modes::{PathStyle, ReconcileMode};
pub use validation::{
    validate_config, validate_extension, validate_extensions, validate_job, validate_separator,
};
