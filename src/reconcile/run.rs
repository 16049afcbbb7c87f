//! Reconciliation passes that delete files.

use std::path::Path;

use crate::config::{JobConfig, Options, ReconcileMode};
use crate::error::Result;
use crate::fs::delete_files;
use crate::reconcile::plan::{plan_complement, plan_keep_list};
use crate::reconcile::state::JobReport;

/// Delete exactly the computed keep-set from the target folder.
///
/// Returns the number of deleted files. The first failed deletion aborts the
/// pass with `Error::Delete`.
pub fn reconcile_keep_list<S: AsRef<str>>(
    source_folder: &Path,
    source_extension: &str,
    target_folder: &Path,
    target_extensions: &[S],
    options: &Options,
) -> Result<usize> {
    let files = plan_keep_list(source_folder, source_extension, target_extensions, options)?;
    delete_files(target_folder, &files, options)
}

/// Delete everything in the target folder except the computed keep-set.
///
/// Returns the number of deleted files. The first failed deletion aborts the
/// pass with `Error::Delete`.
pub fn reconcile_complement<S: AsRef<str>>(
    source_folder: &Path,
    source_extension: &str,
    target_folder: &Path,
    target_extensions: &[S],
    options: &Options,
) -> Result<usize> {
    let files = plan_complement(
        source_folder,
        source_extension,
        target_folder,
        target_extensions,
        options,
    )?;
    delete_files(target_folder, &files, options)
}

/// Run a configured pass, or only plan it when `dry_run` is set.
pub fn run_job(job: &JobConfig, options: &Options, dry_run: bool) -> Result<JobReport> {
    let mut report = JobReport::new(job.display_name(), job.mode, dry_run);

    tracing::info!(
        "Job '{}': {} {} -> {} ({})",
        report.name,
        job.source_extension,
        job.source_folder.display(),
        job.target_folder.display(),
        job.mode
    );

    report.planned = match job.mode {
        ReconcileMode::KeepList => plan_keep_list(
            &job.source_folder,
            &job.source_extension,
            &job.target_extensions,
            options,
        )?,
        ReconcileMode::Complement => plan_complement(
            &job.source_folder,
            &job.source_extension,
            &job.target_folder,
            &job.target_extensions,
            options,
        )?,
    };

    if !dry_run {
        report.deleted = delete_files(&job.target_folder, &report.planned, options)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fs::{list_directory, FileSet};
    use std::fs::File;
    use std::path::PathBuf;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn sorted(mut files: FileSet) -> FileSet {
        files.sort();
        files
    }

    fn options() -> Options {
        Options {
            show_progress: false,
            ..Options::default()
        }
    }

    fn remaining(dir: &Path) -> FileSet {
        sorted(list_directory(dir, &options()).unwrap())
    }

    #[test]
    fn test_keep_list_deletes_lowered_names() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "IMG1.JPG");
        touch(source.path(), "IMG2.JPG");
        touch(target.path(), "img1.orf");
        touch(target.path(), "img2.orf");
        touch(target.path(), "img3.orf");

        let count =
            reconcile_keep_list(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();

        assert_eq!(count, 2);
        assert_eq!(remaining(target.path()), vec!["img3.orf"]);
    }

    #[test]
    fn test_complement_deletes_unmatched() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "img1.jpg");
        touch(source.path(), "img2.jpg");
        touch(target.path(), "img1.orf");
        touch(target.path(), "img2.orf");
        touch(target.path(), "img3.orf");

        let count =
            reconcile_complement(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();

        assert_eq!(count, 1);
        assert_eq!(remaining(target.path()), vec!["img1.orf", "img2.orf"]);
    }

    #[test]
    fn test_complement_matches_case_insensitively() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "IMG1.JPG");
        touch(target.path(), "IMG1.ORF");
        touch(target.path(), "IMG2.ORF");

        let count =
            reconcile_complement(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();

        assert_eq!(count, 1);
        assert_eq!(remaining(target.path()), vec!["IMG1.ORF"]);
    }

    #[test]
    fn test_complement_deletes_every_case_variant() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "img1.jpg");
        touch(target.path(), "img1.orf");
        touch(target.path(), "IMG3.ORF");
        touch(target.path(), "img3.orf");

        // Case-insensitive filesystems fold the two variants into one file
        if remaining(target.path()).len() < 3 {
            return;
        }

        let count =
            reconcile_complement(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();

        assert_eq!(count, 2);
        assert_eq!(remaining(target.path()), vec!["img1.orf"]);
    }

    #[test]
    fn test_keep_list_with_dotted_extension() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "run1.log");
        touch(target.path(), "run1.tar.gz");
        touch(target.path(), "run2.tar.gz");

        let count =
            reconcile_keep_list(source.path(), "log", target.path(), &["tar.gz"], &options())
                .unwrap();

        assert_eq!(count, 1);
        assert_eq!(remaining(target.path()), vec!["run2.tar.gz"]);
    }

    #[test]
    fn test_empty_source_deletes_nothing() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(target.path(), "img1.orf");

        let count =
            reconcile_keep_list(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();
        assert_eq!(count, 0);

        let count =
            reconcile_complement(source.path(), "jpg", target.path(), &["orf"], &options())
                .unwrap();
        assert_eq!(count, 0);

        assert_eq!(remaining(target.path()), vec!["img1.orf"]);
    }

    #[test]
    fn test_keep_list_missing_target_file_aborts() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "a.jpg");
        touch(target.path(), "a.orf");

        let err = reconcile_keep_list(
            source.path(),
            "jpg",
            target.path(),
            &["orf", "xmp"],
            &options(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Delete { deleted: 1, .. }));
        assert!(remaining(target.path()).is_empty());
    }

    #[test]
    fn test_missing_source_folder() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let missing = source.path().join("missing");

        let err = reconcile_complement(&missing, "jpg", target.path(), &["orf"], &options())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_run_job_dry_run_keeps_files() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        touch(source.path(), "img1.jpg");
        touch(target.path(), "img1.orf");
        touch(target.path(), "img2.orf");

        let job = JobConfig {
            name: Some("raw".to_string()),
            source_folder: PathBuf::from(source.path()),
            source_extension: "jpg".to_string(),
            target_folder: PathBuf::from(target.path()),
            target_extensions: vec!["orf".to_string()],
            mode: ReconcileMode::Complement,
        };

        let report = run_job(&job, &options(), true).unwrap();
        assert_eq!(report.planned, vec!["img2.orf"]);
        assert_eq!(report.deleted, 0);
        assert_eq!(remaining(target.path()).len(), 2);

        let report = run_job(&job, &options(), false).unwrap();
        assert_eq!(report.deleted, 1);
        assert_eq!(remaining(target.path()), vec!["img1.orf"]);
    }
}
