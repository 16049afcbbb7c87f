//! Computing which target files a reconciliation removes.

use std::collections::HashSet;
use std::path::Path;

use crate::config::Options;
use crate::error::Result;
use crate::fs::{
    expand_with_extensions, list_directory, list_directory_with_extension, normalize_case,
    strip_stems, FileSet,
};

/// Build the lower-cased keep-set from the source folder.
///
/// Every source file with `source_extension` contributes
/// `stem + "." + extension` for each target extension, stem-major.
pub fn build_keep_set<S: AsRef<str>>(
    source_folder: &Path,
    source_extension: &str,
    target_extensions: &[S],
    options: &Options,
) -> Result<FileSet> {
    let files = list_directory_with_extension(source_folder, source_extension, options)?;
    let stems = strip_stems(&files, options);
    let expanded = expand_with_extensions(&stems, target_extensions, options);
    Ok(normalize_case(&expanded, options))
}

/// Names removed by keep-list mode: exactly the keep-set.
pub fn plan_keep_list<S: AsRef<str>>(
    source_folder: &Path,
    source_extension: &str,
    target_extensions: &[S],
    options: &Options,
) -> Result<FileSet> {
    build_keep_set(source_folder, source_extension, target_extensions, options)
}

/// Names removed by complement mode: target entries outside the keep-set.
///
/// Membership is tested on lower-cased names; the returned names are the
/// real on-disk ones, in target listing order. Names that differ only in
/// case are separate files and each one is planned.
/// An empty keep-set yields an empty plan.
pub fn plan_complement<S: AsRef<str>>(
    source_folder: &Path,
    source_extension: &str,
    target_folder: &Path,
    target_extensions: &[S],
    options: &Options,
) -> Result<FileSet> {
    let keep = build_keep_set(source_folder, source_extension, target_extensions, options)?;
    let target = list_directory(target_folder, options)?;

    if keep.is_empty() {
        tracing::warn!(
            "No {} files in {}; refusing to empty {}",
            source_extension,
            source_folder.display(),
            target_folder.display()
        );
        return Ok(Vec::new());
    }

    let keep: HashSet<String> = keep.into_iter().collect();
    let lowered = normalize_case(&target, options);
    Ok(subtract(target, lowered, &keep))
}

/// Keep the names whose lower-cased form is not in the keep-set.
fn subtract(names: FileSet, lowered: FileSet, keep: &HashSet<String>) -> FileSet {
    names
        .into_iter()
        .zip(lowered)
        .filter(|(_, lower)| !keep.contains(lower))
        .map(|(name, _)| name)
        .collect()
}
