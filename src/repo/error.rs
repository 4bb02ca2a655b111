//! repo::error
//!
//! Error taxonomy for repository operations.
//!
//! Every public operation returns `Result<_, RepoError>`. Callers that only
//! need to branch on the category use [`RepoError::kind`]; the `Display`
//! output is the human-readable detail shown to users.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::ops::lock::LockError;
use crate::core::types::TypeError;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Category of a [`RepoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation attempted before `init`.
    NotInitialized,
    /// Commit of a file that was never added.
    NoBaseline,
    /// Revert to a (name, timestamp) pair with no snapshot.
    SnapshotNotFound,
    /// Filesystem read/write failure.
    IoFailure,
    /// Missing or malformed file name or timestamp.
    InvalidArgument,
}

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("no repository at {} (run `myvcs init` first)", .0.display())]
    NotInitialized(PathBuf),

    #[error("'{0}' has not been added to the repository")]
    NoBaseline(String),

    #[error("no snapshot of '{name}' at timestamp '{timestamp}'")]
    SnapshotNotFound { name: String, timestamp: String },

    #[error("{context}: {cause}")]
    Io { context: String, cause: io::Error },

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RepoError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, cause: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            cause,
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepoError::NotInitialized(_) => ErrorKind::NotInitialized,
            RepoError::NoBaseline(_) => ErrorKind::NoBaseline,
            RepoError::SnapshotNotFound { .. } => ErrorKind::SnapshotNotFound,
            RepoError::Io { .. } | RepoError::Lock(_) => ErrorKind::IoFailure,
            RepoError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<TypeError> for RepoError {
    fn from(e: TypeError) -> Self {
        RepoError::InvalidArgument(e.to_string())
    }
}
