//! repo::history
//!
//! Read-side projection over the snapshot store.
//!
//! History is never stored on its own: it is recomputed from the snapshot
//! store on every call, so it cannot go stale. Callers depend on the
//! [`HistoryIndex`] trait, which leaves room for a different backing
//! (e.g. an index file) without touching them.

use super::snapshot::SnapshotStore;
use super::RepoResult;
use crate::core::types::{SnapshotId, Timestamp, TrackedName};

/// Ordered views over a repository's snapshots.
pub trait HistoryIndex {
    /// Every snapshot across all files, sorted by entry name.
    fn list_commits(&self) -> RepoResult<Vec<SnapshotId>>;

    /// Timestamps of `name`'s snapshots, ascending.
    ///
    /// Matches the name exactly: `a.txt` never sees `a.txt.bak`.
    fn timestamps_for(&self, name: &TrackedName) -> RepoResult<Vec<Timestamp>> {
        let mut timestamps: Vec<_> = self
            .list_commits()?
            .into_iter()
            .filter(|id| &id.name == name)
            .map(|id| id.timestamp)
            .collect();
        timestamps.sort();
        Ok(timestamps)
    }

    /// The newest snapshot timestamp of `name`, if any.
    fn latest_for(&self, name: &TrackedName) -> RepoResult<Option<Timestamp>> {
        Ok(self.timestamps_for(name)?.into_iter().last())
    }
}

/// [`HistoryIndex`] computed by listing the snapshot directory.
#[derive(Debug, Clone)]
pub struct DirectoryHistory {
    store: SnapshotStore,
}

impl DirectoryHistory {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }
}

impl HistoryIndex for DirectoryHistory {
    fn list_commits(&self) -> RepoResult<Vec<SnapshotId>> {
        let mut ids = self.store.entries()?;
        ids.sort_by_cached_key(|id| id.entry_name());
        Ok(ids)
    }
}
