//! core::atomic
//!
//! Atomic file writes.
//!
//! Every mutating write in the repository goes through this module. Bytes
//! are written to a temporary file in the destination directory, synced,
//! and renamed into place, so a concurrent reader sees either the old
//! content or the new content and never a prefix of either.
//!
//! Temporary files start with `.` and therefore can never be mistaken for
//! a baseline or a snapshot entry.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

fn staged(path: &Path, contents: &[u8]) -> io::Result<NamedTempFile> {
    let dir = path.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no parent directory", path.display()),
        )
    })?;

    let mut file = tempfile::Builder::new().prefix(".tmp").tempfile_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    Ok(file)
}

/// Replace `path` with `contents` atomically.
///
/// On failure the previous content of `path` (if any) is left intact.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file = staged(path, contents)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create `path` with `contents` atomically, failing if it already exists.
///
/// Returns an error of kind [`io::ErrorKind::AlreadyExists`] when `path`
/// is taken. The existing file is never touched.
pub fn create_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file = staged(path, contents)?;
    file.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}
