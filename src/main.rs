//! fileprune - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fileprune::{
    cli::{Args, Command},
    config::{validate_config, validate_extension, validate_job, Config, JobConfig, ReconcileMode},
    error::{exit_codes, Error, Result},
    fs::{list_directory, list_directory_with_extension},
    labels::{annotate_all, labels_to_classes, read_voc_file, BoxStyle},
    output::{
        print_banner, print_error, print_file_list, print_info, print_job_report,
        print_label_summary, print_run_stats, print_success, print_warning,
    },
    reconcile::{run_job, RunState},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::NotFound { .. }
                | Error::PermissionDenied { .. }
                | Error::Delete { .. }
                | Error::Io(_) => ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8),
                Error::MalformedLabel { .. }
                | Error::UnknownLabel(_)
                | Error::InvalidBox(_)
                | Error::InvalidFilename(_)
                | Error::Image(_) => ExitCode::from(exit_codes::LABEL_ERROR as u8),
                Error::JobsFailed(_) => ExitCode::from(exit_codes::SOME_JOBS_FAILED as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    // Init replaces the config, so it must not depend on the current one
    if let Command::Init { path, force } = &args.command {
        return init(path, *force);
    }

    // Load configuration
    let (mut config, config_path) = Config::discover(args.config.as_deref())?;
    if let Some(path) = &config_path {
        print_info(&format!("Using configuration {}", path.display()));
    }

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match &args.command {
        Command::List { folder, ext } => list(&config, folder, ext.as_deref()),
        Command::Prune { dry_run, .. } => {
            let job = args
                .command
                .prune_job()
                .ok_or_else(|| Error::Config("prune arguments missing".into()))?;
            prune(&config, &job, *dry_run)
        }
        Command::Run { job, dry_run } => run_jobs(&config, job.as_deref(), *dry_run),
        Command::Labels { file, .. } => labels(&config, file),
        Command::Annotate {
            file,
            images,
            out,
            limit,
            ..
        } => annotate(&config, file, images, out, *limit),
        Command::Init { path, force } => init(path, *force),
    }
}

/// Print a folder listing.
fn list(config: &Config, folder: &Path, ext: Option<&str>) -> Result<()> {
    let files = match ext {
        Some(ext) => {
            validate_extension("ext", ext)?;
            list_directory_with_extension(folder, ext, &config.options)?
        }
        None => list_directory(folder, &config.options)?,
    };

    print_file_list(&folder.display().to_string(), &files);
    Ok(())
}

/// Run a single ad-hoc reconciliation.
fn prune(config: &Config, job: &JobConfig, dry_run: bool) -> Result<()> {
    validate_job(job)?;

    if job.mode == ReconcileMode::Complement && !dry_run {
        print_warning(&format!(
            "Deleting every file in {} without a matching {} file",
            job.target_folder.display(),
            job.source_extension
        ));
    }

    let report = run_job(job, &config.options, dry_run)?;
    print_job_report(&report);
    Ok(())
}

/// Run every configured job, or the one named.
fn run_jobs(config: &Config, name: Option<&str>, dry_run: bool) -> Result<()> {
    let jobs: Vec<&JobConfig> = match name {
        Some(name) => vec![config
            .job(name)
            .ok_or_else(|| Error::Config(format!("No job named '{}'", name)))?],
        None => config.jobs.iter().collect(),
    };

    if jobs.is_empty() {
        return Err(Error::MissingConfig(
            "jobs (at least one [[jobs]] entry required)".to_string(),
        ));
    }

    let mut state = RunState::default();

    for job in jobs {
        match run_job(job, &config.options, dry_run) {
            Ok(report) => {
                print_job_report(&report);
                state.add_job(&report);
            }
            Err(e) => {
                print_error(&format!("Job '{}' failed: {}", job.display_name(), e));
                state.mark_job_failed();
            }
        }
    }

    print_run_stats(&state);

    if state.jobs_failed > 0 {
        return Err(Error::JobsFailed(state.jobs_failed));
    }

    Ok(())
}

/// Parse a label file and print records with class indices.
fn labels(config: &Config, file: &Path) -> Result<()> {
    let annotations = read_voc_file(file, &config.labels.separator, &config.options)?;
    let labels = annotations.labels();
    let (classes, indices) = labels_to_classes(&labels);

    print_label_summary(&annotations, &classes, &indices);
    Ok(())
}

/// Draw label boxes onto copies of the images.
fn annotate(
    config: &Config,
    file: &Path,
    images: &Path,
    out: &Path,
    limit: Option<usize>,
) -> Result<()> {
    let annotations = read_voc_file(file, &config.labels.separator, &config.options)?;
    let style = BoxStyle::from(&config.labels);

    let count = annotate_all(&annotations, images, out, &style, limit, &config.options)?;
    print_success(&format!(
        "Wrote {} annotated images to {}",
        count,
        out.display()
    ));
    Ok(())
}

/// Write a starter configuration file.
fn init(path: &Path, force: bool) -> Result<()> {
    Config::write_starter(path, force)?;
    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
