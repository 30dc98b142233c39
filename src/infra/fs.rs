//! Atomic file writes for exported pages.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while writing an output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },
}

/// Writes `content` to `path` via a temp file in the same directory.
///
/// Readers see either the old file or the complete new one, never a partial
/// write.
///
/// # Errors
///
/// Returns `WriteError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `WriteError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), WriteError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(WriteError::ParentNotFound { path: path.into() }),
    };

    if !parent.exists() {
        return Err(WriteError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| WriteError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| WriteError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| WriteError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
