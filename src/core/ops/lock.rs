//! core::ops::lock
//!
//! Exclusive repository lock.
//!
//! # Architecture
//!
//! Every mutating operation (add, commit, revert) holds the repo lock for
//! its whole duration. Separate `myvcs` processes acting on the same
//! repository root are therefore serialized, which is what makes the
//! commit clock race-free.
//!
//! # Storage
//!
//! - `<root>/.vcs/lock` - Lock file with OS-level exclusive lock
//!
//! # Invariants
//!
//! - Lock is automatically released on drop (RAII pattern)
//! - [`RepoLock::acquire`] blocks until the lock is free; operations are
//!   short, so waiting is preferred over failing a user action
//!
//! # Example
//!
//! ```ignore
//! use myvcs::core::ops::lock::RepoLock;
//! use myvcs::core::paths::RepoPaths;
//!
//! let paths = RepoPaths::new("/work/MyRepo".into());
//! let lock = RepoLock::acquire(&paths)?;
//! // ... mutate ...
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};

use fs2::FileExt;
use thiserror::Error;

use crate::core::paths::RepoPaths;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Failed to create lock file or directory.
    #[error("failed to create lock: {0}")]
    CreateFailed(String),

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock: {0}")]
    AcquireFailed(String),
}

/// An exclusive lock on the repository.
///
/// The lock is released when this guard is dropped.
#[derive(Debug)]
pub struct RepoLock {
    file: File,
}

impl RepoLock {
    /// Acquire the repository lock, waiting for any other holder.
    ///
    /// # Errors
    ///
    /// - [`LockError::CreateFailed`] if the lock file cannot be created
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(paths: &RepoPaths) -> Result<Self, LockError> {
        let dir = paths.internal_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            LockError::CreateFailed(format!("cannot create {}: {}", dir.display(), e))
        })?;

        let path = paths.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                LockError::CreateFailed(format!("cannot open {}: {}", path.display(), e))
            })?;

        file.lock_exclusive()
            .map_err(|e| LockError::AcquireFailed(e.to_string()))?;
        Ok(Self { file })
    }
}

impl Drop for RepoLock {
    fn drop(&mut self) {
        // Closing the file releases the lock too; unlock eagerly anyway.
        let _ = self.file.unlock();
    }
}
