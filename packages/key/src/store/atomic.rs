//! Atomic file replacement
//!
//! Bytes go to a uniquely named sibling temp file which is synced, closed,
//! and renamed over the destination. A reader of the destination path sees
//! either the previous content or the complete new content, never a
//! truncated file.

use crate::{KeyError, Result};
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Write `bytes` to `path`, replacing any existing file.
///
/// The parent directory must already exist. On failure the temp file is
/// removed and `path` is left untouched. A symlink at `path` is replaced by
/// the new file, not followed; its target keeps its old content.
///
/// # Errors
///
/// Returns [`KeyError::Io`] if the temp file cannot be created, written or
/// synced, or if the final rename fails.
pub fn write_to_file(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_new_file(&temp_path, bytes) {
        remove_temp(&temp_path);
        return Err(KeyError::io(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        remove_temp(&temp_path);
        return Err(KeyError::io(path, e));
    }

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Sibling of `path` named `<stem>.tmp.<uuid>`
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    if path.file_name().is_none() {
        return Err(KeyError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    }
    Ok(path.with_extension(format!("tmp.{}", Uuid::new_v4())))
}

fn write_new_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        // Owner read/write only
        options.mode(0o600);
    }

    // Handle is dropped at the end of this scope on every path.
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_temp(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove temp file {}: {e}", temp_path.display()),
    }
}
