//! Filename stem and extension manipulation.

use crate::config::Options;
use crate::fs::FileSet;

/// Stem of a filename: everything before the first period.
///
/// `photo.v2.jpg` has stem `photo`. Names without a period are their own stem.
pub fn stem(name: &str) -> &str {
    match name.find('.') {
        Some(dot_pos) => &name[..dot_pos],
        None => name,
    }
}

/// Check whether a filename ends in `.extension`, ignoring case.
pub fn has_extension(name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_lowercase());
    name.to_lowercase().ends_with(&suffix)
}

/// Strip every filename down to its stem.
pub fn strip_stems<S: AsRef<str>>(files: &[S], options: &Options) -> FileSet {
    let stems: FileSet = files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            let stripped = stem(file);
            if options.verbose {
                tracing::info!("Stripped file: {} -> {}", file, stripped);
            }
            stripped.to_string()
        })
        .collect();

    if options.verbose {
        tracing::info!("Stripped {} files", stems.len());
    }
    stems
}

/// Append every extension to every stem, stem-major then extension-minor.
pub fn expand_with_extensions<S: AsRef<str>, E: AsRef<str>>(
    stems: &[S],
    extensions: &[E],
    options: &Options,
) -> FileSet {
    let mut expanded = Vec::with_capacity(stems.len() * extensions.len());

    for stem in stems {
        for extension in extensions {
            let name = format!("{}.{}", stem.as_ref(), extension.as_ref());
            if options.verbose {
                tracing::info!("Added extension: {}", name);
            }
            expanded.push(name);
        }
    }

    if options.verbose {
        tracing::info!("Expanded to {} files", expanded.len());
    }
    expanded
}

/// Lower-case every filename.
pub fn normalize_case<S: AsRef<str>>(files: &[S], options: &Options) -> FileSet {
    let lowered: FileSet = files
        .iter()
        .map(|file| {
            let lowered = file.as_ref().to_lowercase();
            if options.verbose {
                tracing::info!("Lowered file: {}", lowered);
            }
            lowered
        })
        .collect();

    if options.verbose {
        tracing::info!("Lowered {} files", lowered.len());
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Options {
        Options::default()
    }

    #[test]
    fn test_stem_truncates_at_first_period() {
        assert_eq!(stem("photo.v2.jpg"), "photo");
        assert_eq!(stem("a.b.c"), "a");
        assert_eq!(stem("README"), "README");
        assert_eq!(stem(".hidden"), "");
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("a.JPG", "jpg"));
        assert!(has_extension("a.jpg", "JPG"));
        assert!(has_extension("a.b.jpg", "jpg"));
        assert!(!has_extension("ajpg", "jpg"));
        assert!(!has_extension("a.jpeg", "jpg"));
    }

    #[test]
    fn test_strip_stems() {
        assert_eq!(strip_stems(&["a.b.c"], &quiet()), vec!["a"]);
        assert_eq!(
            strip_stems(&["IMG1.JPG", "notes", "x.tar.gz"], &quiet()),
            vec!["IMG1", "notes", "x"]
        );
    }

    #[test]
    fn test_expand_order_and_length() {
        let expanded = expand_with_extensions(&["a", "b"], &["orf", "xmp"], &quiet());
        assert_eq!(expanded, vec!["a.orf", "a.xmp", "b.orf", "b.xmp"]);
    }

    #[test]
    fn test_expand_length_is_product() {
        let files = ["one.jpg", "two.JPG", "three.v2.jpg"];
        let extensions = ["orf", "xmp", "dng", "tif"];
        for n in 0..=extensions.len() {
            let stems = strip_stems(&files, &quiet());
            let expanded = expand_with_extensions(&stems, &extensions[..n], &quiet());
            assert_eq!(expanded.len(), files.len() * n);
        }
    }

    #[test]
    fn test_expanded_names_use_first_period_stem() {
        let stems = strip_stems(&["photo.v2.jpg"], &quiet());
        assert_eq!(expand_with_extensions(&stems, &["orf"], &quiet()), vec!["photo.orf"]);
    }

    #[test]
    fn test_normalize_case_is_idempotent() {
        let files = ["IMG1.ORF", "MiXeD.Jpg", "lower.png"];
        let once = normalize_case(&files, &quiet());
        let twice = normalize_case(&once, &quiet());
        assert_eq!(once, vec!["img1.orf", "mixed.jpg", "lower.png"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_verbose_does_not_change_results() {
        let verbose = Options {
            verbose: true,
            ..Options::default()
        };
        assert_eq!(
            strip_stems(&["a.b"], &verbose),
            strip_stems(&["a.b"], &quiet())
        );
    }
}
