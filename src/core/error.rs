/// Error types for scanning and patching

use std::io;
use std::path::{Path, PathBuf};

/// Failure while processing a single file. Never aborts a scan.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Classify an I/O error raised while handling `path`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            FileError::PermissionDenied { path: path.to_path_buf() }
        } else {
            FileError::Io { path: path.to_path_buf(), source }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileError::PermissionDenied { path } | FileError::Io { path, .. } => path,
        }
    }
}

/// Pre-flight failure on the scan root
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
