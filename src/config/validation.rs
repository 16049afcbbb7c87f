//! Configuration validation logic.

use crate::config::loader::{Config, JobConfig, LabelsConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Maximum box line thickness in pixels.
const MAX_BOX_THICKNESS: u32 = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_labels(&config.labels)?;

    for job in &config.jobs {
        validate_job(job)?;
    }

    Ok(())
}

/// Validate a single reconciliation job.
pub fn validate_job(job: &JobConfig) -> Result<()> {
    if job.source_folder.as_os_str().is_empty() {
        return Err(Error::MissingConfig(format!(
            "source_folder (job '{}')",
            job.display_name()
        )));
    }

    if job.target_folder.as_os_str().is_empty() {
        return Err(Error::MissingConfig(format!(
            "target_folder (job '{}')",
            job.display_name()
        )));
    }

    validate_extension("source_extension", &job.source_extension)?;
    validate_extensions("target_extensions", &job.target_extensions)?;

    Ok(())
}

/// Validate a list of extensions; at least one is required.
pub fn validate_extensions<S: AsRef<str>>(field: &str, extensions: &[S]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::MissingConfig(format!(
            "{} (at least one extension required)",
            field
        )));
    }

    for extension in extensions {
        validate_extension(field, extension.as_ref())?;
    }

    Ok(())
}

/// Validate an extension given without its leading dot.
pub fn validate_extension(field: &str, extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    if extension.starts_with('.') {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Extension '{}' must be given without the leading dot",
                extension
            ),
        });
    }

    // Dot-separated parts of letters, digits, underscores, hyphens and plus
    // signs (`orf`, `tar.gz`); no empty parts or path separators
    let extension_pattern = Regex::new(r"^[A-Za-z0-9_+-]+(\.[A-Za-z0-9_+-]+)*$").unwrap();

    if !extension_pattern.is_match(extension) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Extension '{}' contains invalid characters", extension),
        });
    }

    Ok(())
}

/// Validate label parsing and drawing settings.
pub fn validate_labels(labels: &LabelsConfig) -> Result<()> {
    validate_separator(&labels.separator)?;

    if labels.box_thickness == 0 || labels.box_thickness > MAX_BOX_THICKNESS {
        return Err(Error::ConfigValidation {
            field: "box_thickness".to_string(),
            message: format!(
                "Thickness must be between 1 and {} (got {})",
                MAX_BOX_THICKNESS, labels.box_thickness
            ),
        });
    }

    Ok(())
}

/// Validate a label field separator.
pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(Error::MissingConfig("separator".to_string()));
    }

    if separator.contains('\n') || separator.contains('\r') {
        return Err(Error::ConfigValidation {
            field: "separator".to_string(),
            message: "Separator cannot contain line breaks".to_string(),
        });
    }

    Ok(())
}
