//! Locating prompt record files on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively lists `*.json` files below `dir`, sorted by path.
///
/// Symlinked files are included when their target is a regular file.
/// Symlinked directories are not descended into. Returns an empty list when
/// `dir` does not exist.
#[must_use]
pub fn json_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "json") && path.is_file())
        .collect()
}
