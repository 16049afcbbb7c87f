//! Configuration structures and loading logic.

use crate::config::modes::{PathStyle, ReconcileMode};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fileprune.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: Options,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<JobConfig>,
}

/// Options passed to every file operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Emit one log line per processed name.
    #[serde(default)]
    pub verbose: bool,

    /// Keep subdirectories in listings (they are skipped otherwise).
    #[serde(default)]
    pub include_directories: bool,

    /// How folder and filename are combined.
    #[serde(default)]
    pub path_style: PathStyle,

    /// Whether to show a progress bar while deleting.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            verbose: false,
            include_directories: false,
            path_style: PathStyle::default(),
            show_progress: true,
        }
    }
}

/// Label file and drawing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Field separator of VOC label files.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Box color as RGB.
    #[serde(default = "default_box_color")]
    pub box_color: [u8; 3],

    /// Box line thickness in pixels.
    #[serde(default = "default_box_thickness")]
    pub box_thickness: u32,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            box_color: default_box_color(),
            box_thickness: default_box_thickness(),
        }
    }
}

/// One configured reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Name used in logs and with `run --job`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Folder whose files define the keep-set.
    pub source_folder: PathBuf,

    /// Extension selecting the source files (without dot).
    pub source_extension: String,

    /// Folder files get deleted from.
    pub target_folder: PathBuf,

    /// Extensions appended to each source stem.
    pub target_extensions: Vec<String>,

    #[serde(default)]
    pub mode: ReconcileMode,
}

impl JobConfig {
    /// Name for display, falling back to the target folder.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.target_folder.display().to_string())
    }
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    ",".to_string()
}

fn default_box_color() -> [u8; 3] {
    [255, 0, 0]
}

fn default_box_thickness() -> u32 {
    2
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load the configuration.
    ///
    /// An explicit path must exist. Otherwise `fileprune.toml` in the working
    /// directory wins over the per-user config file; with neither present the
    /// defaults are returned together with `None`.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in [Some(PathBuf::from(CONFIG_FILE_NAME)), user_config_path()]
            .into_iter()
            .flatten()
        {
            if candidate.is_file() {
                tracing::debug!("Using config file {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Default configuration with one example job.
    pub fn starter() -> Self {
        let mut config = Self::default();
        config.jobs.push(JobConfig {
            name: Some("raw-cleanup".to_string()),
            source_folder: PathBuf::from("photos"),
            source_extension: "jpg".to_string(),
            target_folder: PathBuf::from("photos/Raw"),
            target_extensions: vec!["orf".to_string()],
            mode: ReconcileMode::Complement,
        });
        config
    }

    /// Write the starter configuration to `path`.
    ///
    /// An existing file is only replaced with `force`; its content is never
    /// read, so a broken config can always be overwritten.
    pub fn write_starter(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(Error::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Self::starter().save(path)
    }

    /// Find a job by name.
    pub fn job(&self, name: &str) -> Option<&JobConfig> {
        self.jobs
            .iter()
            .find(|job| job.name.as_deref() == Some(name))
    }
}

/// Per-user config file location (e.g. `~/.config/fileprune/config.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileprune").map(|dirs| dirs.config_dir().join("config.toml"))
}
