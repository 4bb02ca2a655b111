//! repo::revert
//!
//! Restore a baseline from a snapshot.
//!
//! Reverting only overwrites the baseline. It does not create a snapshot
//! and never removes one, so every later snapshot stays reachable.

use tracing::info;

use super::staging;
use super::{RepoResult, Repository};
use crate::core::types::{SnapshotId, Timestamp, TrackedName};

/// Overwrite the baseline of `name` with its snapshot at `timestamp`.
///
/// Returns the snapshot id and the bytes written, read under the same
/// lock as the write.
///
/// # Errors
///
/// - [`NotInitialized`](super::RepoError::NotInitialized) if the
///   repository does not exist
/// - [`SnapshotNotFound`](super::RepoError::SnapshotNotFound) if `name`
///   has no snapshot at `timestamp`; the baseline is left unchanged
/// - [`Io`](super::RepoError::Io) if the baseline cannot be written
pub fn revert(
    repo: &Repository,
    name: &TrackedName,
    timestamp: &Timestamp,
) -> RepoResult<(SnapshotId, Vec<u8>)> {
    let lock = repo.lock()?;

    let id = SnapshotId::new(name.clone(), *timestamp);
    let content = repo.store().read(&id)?;
    staging::write_baseline(repo, &lock, name, &content)?;

    info!(snapshot = %id, "reverted");
    Ok((id, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{ErrorKind, HistoryIndex};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Repository, TrackedName) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        repo.init().unwrap();
        (temp, repo, TrackedName::new("notes.txt").unwrap())
    }

    #[test]
    fn revert_restores_old_content() {
        let (_temp, repo, n) = setup();
        repo.add(&n, b"v1").unwrap();
        let t1 = repo.commit(&n).unwrap().timestamp;
        repo.add(&n, b"v2").unwrap();
        let t2 = repo.commit(&n).unwrap().timestamp;
        assert!(t2 > t1);

        let (id, content) = revert(&repo, &n, &t1).unwrap();
        assert_eq!(id.timestamp, t1);
        assert_eq!(content, b"v1");
        assert_eq!(repo.read(&n).unwrap(), b"v1");
        assert_eq!(repo.history().timestamps_for(&n).unwrap(), vec![t1, t2]);
    }

    #[test]
    fn revert_forward_again() {
        let (_temp, repo, n) = setup();
        repo.add(&n, b"v1").unwrap();
        let t1 = repo.commit(&n).unwrap().timestamp;
        repo.add(&n, b"v2").unwrap();
        let t2 = repo.commit(&n).unwrap().timestamp;

        revert(&repo, &n, &t1).unwrap();
        revert(&repo, &n, &t2).unwrap();
        assert_eq!(repo.read(&n).unwrap(), b"v2");
    }

    #[test]
    fn unknown_timestamp_is_snapshot_not_found() {
        let (_temp, repo, n) = setup();
        repo.add(&n, b"v1").unwrap();
        repo.commit(&n).unwrap();
        repo.add(&n, b"uncommitted").unwrap();

        let bogus = Timestamp::parse("19990101000000000000").unwrap();
        let err = revert(&repo, &n, &bogus).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SnapshotNotFound);
        assert_eq!(repo.read(&n).unwrap(), b"uncommitted");
    }

    #[test]
    fn another_files_timestamp_is_not_found() {
        let (_temp, repo, n) = setup();
        let other = TrackedName::new("other.txt").unwrap();
        repo.add(&other, b"o").unwrap();
        let t_other = repo.commit(&other).unwrap().timestamp;
        repo.add(&n, b"mine").unwrap();

        let err = revert(&repo, &n, &t_other).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SnapshotNotFound);
        assert_eq!(repo.read(&n).unwrap(), b"mine");
    }
}
