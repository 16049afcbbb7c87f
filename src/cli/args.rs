//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, JobConfig, PathStyle, ReconcileMode, CONFIG_FILE_NAME};

/// File-set reconciliation and VOC label CLI.
#[derive(Parser, Debug)]
#[command(
    name = "fileprune",
    version,
    about = "Reconcile file sets across folders and inspect VOC box labels",
    long_about = "Delete files in a target folder based on the stems of files in a source folder,\n\
                  for example removing RAW files whose JPG was culled.\n\n\
                  Also parses VOC bounding-box label files and draws their boxes on images."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "FILEPRUNE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every processed file name.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat subdirectories like files in listings.
    #[arg(long, global = true)]
    pub include_directories: bool,

    /// Build paths by plain concatenation (folder must end in a separator).
    #[arg(long, global = true)]
    pub concat_paths: bool,

    /// Hide progress bars and the banner.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the files of a folder.
    List {
        /// Folder to list.
        folder: PathBuf,

        /// Only list files with this extension (without dot).
        #[arg(short, long)]
        ext: Option<String>,
    },

    /// Run one reconciliation between a source and a target folder.
    Prune {
        /// Folder whose files define the keep-set.
        #[arg(long)]
        source: PathBuf,

        /// Extension of the source files (without dot).
        #[arg(short = 'e', long = "ext")]
        source_extension: String,

        /// Folder to delete files from.
        #[arg(long)]
        target: PathBuf,

        /// Extension(s) to map each source stem to, comma separated.
        #[arg(long = "to", value_delimiter = ',', num_args = 1.., required = true)]
        target_extensions: Vec<String>,

        /// Which side of the keep-set to delete.
        #[arg(long, value_enum, default_value = "keep-list")]
        mode: ReconcileModeArg,

        /// Only print what would be deleted.
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the jobs of the configuration file.
    Run {
        /// Only run the job with this name.
        #[arg(long)]
        job: Option<String>,

        /// Only print what would be deleted.
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse a VOC label file and print its records and classes.
    Labels {
        /// Label file to parse.
        file: PathBuf,

        /// Field separator (overrides the config).
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Draw the boxes of a VOC label file onto copies of its images.
    Annotate {
        /// Label file to parse.
        file: PathBuf,

        /// Folder containing the images named in the label file.
        #[arg(long)]
        images: PathBuf,

        /// Folder to write annotated images to.
        #[arg(long)]
        out: PathBuf,

        /// Annotate at most this many images.
        #[arg(long)]
        limit: Option<usize>,

        /// Field separator (overrides the config).
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Write a configuration file with defaults and an example job.
    Init {
        /// Where to write the file.
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// CLI reconcile mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReconcileModeArg {
    /// Delete exactly the computed names.
    KeepList,
    /// Delete everything except the computed names.
    Complement,
}

impl From<ReconcileModeArg> for ReconcileMode {
    fn from(arg: ReconcileModeArg) -> Self {
        match arg {
            ReconcileModeArg::KeepList => ReconcileMode::KeepList,
            ReconcileModeArg::Complement => ReconcileMode::Complement,
        }
    }
}

impl Command {
    /// The ad-hoc job described by a `prune` command.
    pub fn prune_job(&self) -> Option<JobConfig> {
        match self {
            Command::Prune {
                source,
                source_extension,
                target,
                target_extensions,
                mode,
                ..
            } => Some(JobConfig {
                name: Some("prune".to_string()),
                source_folder: source.clone(),
                source_extension: source_extension.clone(),
                target_folder: target.clone(),
                target_extensions: target_extensions.clone(),
                mode: (*mode).into(),
            }),
            _ => None,
        }
    }

    /// Separator given on the command line, if any.
    pub fn separator(&self) -> Option<&str> {
        match self {
            Command::Labels { separator, .. } | Command::Annotate { separator, .. } => {
                separator.as_deref()
            }
            _ => None,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        // Boolean flags (only override if set to non-default)
        if self.verbose {
            config.options.verbose = true;
        }

        if self.include_directories {
            config.options.include_directories = true;
        }

        if self.concat_paths {
            config.options.path_style = PathStyle::Concat;
        }

        if self.quiet {
            config.options.show_progress = false;
        }

        if let Some(separator) = self.command.separator() {
            config.labels.separator = separator.to_string();
        }
    }
}
