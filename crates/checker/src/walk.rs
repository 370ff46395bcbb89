use crate::error::{CheckError, CheckErrorExt};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every regular file under `root`, sorted by path.
///
/// # Errors
/// Fails on unreadable directories and on the first symlink found, since a symlinked file
/// would be served under a different href than the one on disk.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>, CheckError> {
    collect_files(root, true)
}

/// Like [`walk_files`], but silently skips symlinks. Used for the sources directory.
pub(crate) fn collect_files(
    root: &Path,
    reject_symlinks: bool,
) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.context(format!("Failed to list {}", root.display()))?;
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            if reject_symlinks {
                return Err(CheckError::Symlink { path: entry.into_path() });
            }
            continue;
        }

        if file_type.is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
