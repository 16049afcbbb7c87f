//! File deletion.

use std::fs;
use std::path::Path;

use indicatif::ProgressBar;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::fs::paths::entry_path;
use crate::output::create_item_bar;

/// Delete every named file from `folder`, in order.
///
/// The first failure stops the loop: files before it stay deleted, the
/// failing one and everything after it are left untouched. The returned
/// `Error::Delete` carries the number of files removed before the failure.
pub fn delete_files<S: AsRef<str>>(folder: &Path, files: &[S], options: &Options) -> Result<usize> {
    let bar = if options.show_progress && !options.verbose && !files.is_empty() {
        create_item_bar(files.len() as u64, "Deleting")
    } else {
        ProgressBar::hidden()
    };

    let mut count = 0;
    for file in files {
        let file = file.as_ref();
        let path = entry_path(folder, file, options.path_style);

        if let Err(e) = fs::remove_file(&path) {
            bar.abandon();
            return Err(Error::Delete {
                deleted: count,
                source: Box::new(Error::from_io(&path, e)),
            });
        }

        count += 1;
        bar.inc(1);
        if options.verbose {
            tracing::info!("Deleted file: {}", file);
        }
    }

    bar.finish_and_clear();
    if options.verbose {
        tracing::info!("Deleted {} files", count);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathStyle;
    use std::fs::File;

    fn options() -> Options {
        Options {
            show_progress: false,
            ..Options::default()
        }
    }

    #[test]
    fn test_delete_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.orf")).unwrap();
        File::create(dir.path().join("b.orf")).unwrap();
        File::create(dir.path().join("c.orf")).unwrap();

        let count = delete_files(dir.path(), &["a.orf", "b.orf"], &options()).unwrap();
        assert_eq!(count, 2);
        assert!(!dir.path().join("a.orf").exists());
        assert!(!dir.path().join("b.orf").exists());
        assert!(dir.path().join("c.orf").exists());
    }

    #[test]
    fn test_delete_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let none: [&str; 0] = [];
        assert_eq!(delete_files(dir.path(), &none, &options()).unwrap(), 0);
    }

    #[test]
    fn test_failure_aborts_remaining_deletions() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.orf")).unwrap();
        File::create(dir.path().join("c.orf")).unwrap();

        let err = delete_files(dir.path(), &["a.orf", "b.orf", "c.orf"], &options()).unwrap_err();

        match err {
            Error::Delete { deleted, source } => {
                assert_eq!(deleted, 1);
                assert!(matches!(*source, Error::NotFound { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dir.path().join("a.orf").exists());
        assert!(dir.path().join("c.orf").exists());
    }

    #[test]
    fn test_directory_is_not_removed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let err = delete_files(dir.path(), &["sub"], &options()).unwrap_err();
        assert!(matches!(err, Error::Delete { deleted: 0, .. }));
        assert!(dir.path().join("sub").is_dir());
    }

    #[test]
    fn test_concat_path_style() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.orf")).unwrap();

        let mut folder = dir.path().as_os_str().to_os_string();
        folder.push(std::path::MAIN_SEPARATOR_STR);

        let options = Options {
            path_style: PathStyle::Concat,
            ..options()
        };
        let count = delete_files(Path::new(&folder), &["a.orf"], &options).unwrap();
        assert_eq!(count, 1);
        assert!(!dir.path().join("a.orf").exists());
    }
}
