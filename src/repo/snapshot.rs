//! repo::snapshot
//!
//! Append-only store of immutable snapshots, and `commit`.
//!
//! # Storage
//!
//! One file per snapshot in `<root>/commits/`, named `<name>.<timestamp>`.
//! Entries are published with a no-clobber rename: a snapshot is either
//! fully present or absent, and an existing entry is never replaced.

use std::fs;
use std::io;

use tracing::{debug, info, trace};

use super::clock::CommitClock;
use super::history::HistoryIndex;
use super::staging;
use super::{RepoError, RepoResult, Repository};
use crate::core::atomic;
use crate::core::paths::RepoPaths;
use crate::core::types::{SnapshotId, TrackedName};

/// The snapshot store of one repository.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    paths: RepoPaths,
}

impl SnapshotStore {
    pub fn new(paths: RepoPaths) -> Self {
        Self { paths }
    }

    /// Publish a new snapshot.
    ///
    /// # Errors
    ///
    /// [`RepoError::Io`] if the entry cannot be written or already exists.
    pub fn write(&self, id: &SnapshotId, content: &[u8]) -> RepoResult<()> {
        let dir = self.paths.commits_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| RepoError::io(format!("failed to create {}", dir.display()), e))?;

        let path = self.paths.snapshot_path(id);
        atomic::create_atomic(&path, content)
            .map_err(|e| RepoError::io(format!("failed to write snapshot {}", id), e))
    }

    /// Read the content of a snapshot.
    ///
    /// # Errors
    ///
    /// [`RepoError::SnapshotNotFound`] if no such entry exists.
    pub fn read(&self, id: &SnapshotId) -> RepoResult<Vec<u8>> {
        let path = self.paths.snapshot_path(id);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RepoError::SnapshotNotFound {
                name: id.name.to_string(),
                timestamp: id.timestamp.to_string(),
            }),
            Err(e) => Err(RepoError::io(format!("failed to read snapshot {}", id), e)),
        }
    }

    /// Every snapshot currently in the store, in directory order.
    ///
    /// Entries that are not snapshot names (temporary files, stray files)
    /// are skipped.
    pub fn entries(&self) -> RepoResult<Vec<SnapshotId>> {
        let dir = self.paths.commits_dir();
        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepoError::io(format!("failed to list {}", dir.display()), e)),
        };

        let mut ids = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| RepoError::io(format!("failed to list {}", dir.display()), e))?;
            let file_name = entry.file_name();
            match file_name.to_str().map(SnapshotId::parse) {
                Some(Ok(id)) => ids.push(id),
                _ => trace!(entry = ?file_name, "skipping non-snapshot entry"),
            }
        }
        Ok(ids)
    }
}

/// Snapshot the current baseline of `name`.
///
/// The baseline itself is not modified.
///
/// # Errors
///
/// - [`RepoError::NotInitialized`] if the repository does not exist
/// - [`RepoError::NoBaseline`] if `name` was never added
/// - [`RepoError::Io`] if the snapshot cannot be written
pub fn commit(repo: &Repository, name: &TrackedName) -> RepoResult<SnapshotId> {
    commit_with(repo, name, None)
}

/// Snapshot `name`, first replacing its baseline with `refresh` if given.
///
/// The baseline write and the snapshot happen under one lock, so the
/// snapshot holds exactly `refresh` even when other writers race. A
/// refresh never starts tracking a file: `name` must already have a
/// baseline.
///
/// # Errors
///
/// Same as [`commit`]. On `NoBaseline` nothing is written.
pub fn commit_with(
    repo: &Repository,
    name: &TrackedName,
    refresh: Option<&[u8]>,
) -> RepoResult<SnapshotId> {
    let lock = repo.lock()?;

    let content = match refresh {
        Some(content) => {
            if !repo.is_tracked(name) {
                return Err(RepoError::NoBaseline(name.to_string()));
            }
            staging::write_baseline(repo, &lock, name, content)?;
            content.to_vec()
        }
        None => repo.read(name)?,
    };

    let floor = repo.history().latest_for(name)?;
    let timestamp = CommitClock::new(repo.paths().clone()).issue(&lock, floor)?;

    let id = SnapshotId::new(name.clone(), timestamp);
    debug!(snapshot = %id, bytes = content.len(), "writing snapshot");
    repo.store().write(&id, &content)?;

    info!(snapshot = %id, "committed");
    Ok(id)
}
