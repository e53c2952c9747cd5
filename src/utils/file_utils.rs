/// File discovery utilities
///
/// This module finds the WAV files a scan should visit and validates the scan
/// root before any file is opened.

use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::core::error::ScanError;

/// File name suffix matched during discovery (case-sensitive)
pub const WAV_EXTENSION: &str = ".wav";

/// Check that `path` exists and is a directory.
pub fn validate_directory(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::MissingDirectory(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Whether a path names a `.wav` file. `SONG.WAV` does not match.
pub fn has_wav_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(WAV_EXTENSION))
        .unwrap_or(false)
}

/// Recursively collect every regular `.wav` file under `root`.
///
/// Entries are visited in file-name order within each directory so that the
/// result is stable between runs. Symlinks are not followed. Entries that
/// cannot be read are logged and skipped.
///
/// # Arguments
///
/// * `root` - Directory to search
///
/// # Returns
///
/// Paths of all matching files, in traversal order
pub fn find_wav_files(root: &Path) -> Vec<PathBuf> {
    let mut wav_files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && has_wav_extension(entry.path()) {
            wav_files.push(entry.into_path());
        }
    }

    info!("Found {} WAV files under {}", wav_files.len(), root.display());
    wav_files
}
