//! Document discovery for directory mode.

use crate::PipelineError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Stem fragments marking files this tool already produced.
pub const CLEANED_MARKERS: [&str; 2] = ["_clean", "_cleaned"];

#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Matching files skipped because they carry a cleaned marker.
    pub skipped: Vec<PathBuf>,
}

pub fn is_already_cleaned(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| {
            let stem = stem.to_string_lossy();
            CLEANED_MARKERS.iter().any(|m| stem.contains(m))
        })
        .unwrap_or(false)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// Recursively collect convertible files under `root`, sorted by path.
/// Anything under `exclude` (typically the output directory) is ignored.
pub fn find_documents(
    root: &Path,
    extensions: &[String],
    exclude: Option<&Path>,
) -> Result<Discovery, PipelineError> {
    if !root.is_dir() {
        return Err(PipelineError::DirectoryNotFound(root.display().to_string()));
    }

    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| exclude.map_or(true, |ex| !entry.path().starts_with(ex)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        if is_already_cleaned(path) {
            discovery.skipped.push(path.to_path_buf());
        } else {
            discovery.files.push(path.to_path_buf());
        }
    }

    Ok(discovery)
}
