//! Path building for entries of a folder.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::PathStyle;

/// Build the path of `name` inside `folder`.
pub fn entry_path(folder: &Path, name: &str, style: PathStyle) -> PathBuf {
    match style {
        PathStyle::Join => folder.join(name),
        PathStyle::Concat => {
            let mut joined = OsString::from(folder.as_os_str());
            joined.push(name);
            PathBuf::from(joined)
        }
    }
}
