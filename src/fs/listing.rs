//! Directory listings.

use std::fs;
use std::path::Path;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::fs::naming::has_extension;
use crate::fs::FileSet;

/// List the entry names of a folder in directory order.
///
/// Subdirectories are skipped unless `options.include_directories` is set.
/// Names that are not valid UTF-8 are skipped with a warning.
pub fn list_directory(folder: &Path, options: &Options) -> Result<FileSet> {
    let entries = fs::read_dir(folder).map_err(|e| Error::from_io(folder, e))?;
    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(folder, e))?;

        if !options.include_directories {
            let file_type = entry.file_type().map_err(|e| Error::from_io(&entry.path(), e))?;
            if file_type.is_dir() {
                tracing::debug!("Skipping directory: {}", entry.path().display());
                continue;
            }
        }

        match entry.file_name().into_string() {
            Ok(name) => {
                if options.verbose {
                    tracing::info!("Found file: {}", name);
                }
                files.push(name);
            }
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", raw);
            }
        }
    }

    if options.verbose {
        tracing::info!("Found {} files in {}", files.len(), folder.display());
    }

    Ok(files)
}

/// List the entry names of a folder that end in `.extension`, ignoring case.
pub fn list_directory_with_extension(
    folder: &Path,
    extension: &str,
    options: &Options,
) -> Result<FileSet> {
    let quiet = Options {
        verbose: false,
        ..options.clone()
    };

    let files: FileSet = list_directory(folder, &quiet)?
        .into_iter()
        .filter(|name| has_extension(name, extension))
        .inspect(|name| {
            if options.verbose {
                tracing::info!("Found file: {}", name);
            }
        })
        .collect();

    if options.verbose {
        tracing::info!(
            "Found {} files with extension {} in {}",
            files.len(),
            extension,
            folder.display()
        );
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn sorted(mut files: FileSet) -> FileSet {
        files.sort();
        files
    }

    #[test]
    fn test_list_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.orf");

        let files = list_directory(dir.path(), &Options::default()).unwrap();
        assert_eq!(sorted(files), vec!["a.jpg", "b.orf"]);
    }

    #[test]
    fn test_list_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = list_directory(dir.path(), &Options::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_directory(&dir.path().join("missing"), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_directories_skipped_by_default() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.orf");
        fs::create_dir(dir.path().join("sub.orf")).unwrap();

        let files = list_directory(dir.path(), &Options::default()).unwrap();
        assert_eq!(files, vec!["a.orf"]);

        let options = Options {
            include_directories: true,
            ..Options::default()
        };
        let files = list_directory(dir.path(), &options).unwrap();
        assert_eq!(sorted(files), vec!["a.orf", "sub.orf"]);
    }

    #[test]
    fn test_extension_filter_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "c.v2.jpg");
        touch(dir.path(), "djpg");
        touch(dir.path(), "e.png");

        let files =
            list_directory_with_extension(dir.path(), "jpg", &Options::default()).unwrap();
        assert_eq!(sorted(files), vec!["a.JPG", "b.jpg", "c.v2.jpg"]);
    }
}
