//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve a document folder given on the command line.
///
/// Relative folders are joined onto the current directory (or "." if that
/// cannot be determined) so that printed notes paths are absolute.
pub fn resolve_folder(folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        return folder.to_path_buf();
    }
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(folder)
}
