//! repo::staging
//!
//! `add`: establish or refresh a file's baseline.
//!
//! Staging is the only way a tracked file comes into existence. It writes
//! the baseline and nothing else; history is untouched, so re-adding the
//! same file any number of times never duplicates a snapshot.

use tracing::{debug, info};

use super::{RepoError, RepoResult, Repository};
use crate::core::atomic;
use crate::core::ops::lock::RepoLock;
use crate::core::types::TrackedName;

/// Write `content` as the baseline of `name`.
///
/// The write is atomic: on failure the previous baseline is intact.
///
/// # Errors
///
/// - [`RepoError::NotInitialized`] if the repository does not exist
/// - [`RepoError::Io`] if the baseline cannot be written
pub fn add(repo: &Repository, name: &TrackedName, content: &[u8]) -> RepoResult<()> {
    let lock = repo.lock()?;
    write_baseline(repo, &lock, name, content)?;

    info!(file = %name, "added to repository");
    Ok(())
}

/// Replace the baseline of `name` while the caller holds the lock.
pub(crate) fn write_baseline(
    repo: &Repository,
    _lock: &RepoLock,
    name: &TrackedName,
    content: &[u8],
) -> RepoResult<()> {
    let path = repo.paths().baseline_path(name);
    debug!(path = %path.display(), bytes = content.len(), "writing baseline");

    atomic::write_atomic(&path, content)
        .map_err(|e| RepoError::io(format!("failed to write {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::ErrorKind;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        repo.init().unwrap();
        (temp, repo)
    }

    #[test]
    fn add_creates_baseline() {
        let (_temp, repo) = setup();
        let name = TrackedName::new("notes.txt").unwrap();

        add(&repo, &name, b"v1").unwrap();
        assert!(repo.is_tracked(&name));
        assert_eq!(repo.read(&name).unwrap(), b"v1");
    }

    #[test]
    fn re_add_overwrites_without_history() {
        let (_temp, repo) = setup();
        let name = TrackedName::new("notes.txt").unwrap();

        add(&repo, &name, b"v1").unwrap();
        add(&repo, &name, b"v2").unwrap();
        add(&repo, &name, b"v2").unwrap();

        assert_eq!(repo.read(&name).unwrap(), b"v2");
        assert!(repo.store().entries().unwrap().is_empty());
    }

    #[test]
    fn add_empty_content() {
        let (_temp, repo) = setup();
        let name = TrackedName::new("empty.txt").unwrap();

        add(&repo, &name, b"").unwrap();
        assert!(repo.is_tracked(&name));
        assert!(repo.read(&name).unwrap().is_empty());
    }

    #[test]
    fn failed_write_is_io_failure_and_leaves_no_temp() {
        let (_temp, repo) = setup();

        // A directory cannot be replaced by a file rename.
        let blocked = TrackedName::new("blocked").unwrap();
        std::fs::create_dir(repo.paths().baseline_path(&blocked)).unwrap();
        let err = add(&repo, &blocked, b"x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);

        let leftovers: Vec<_> = std::fs::read_dir(repo.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn failed_add_keeps_previous_baseline() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, repo) = setup();
        let name = TrackedName::new("notes.txt").unwrap();
        add(&repo, &name, b"v1").unwrap();

        let root = repo.root().to_path_buf();
        std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o555)).unwrap();
        // Privileged users write through directory permissions.
        let enforced = std::fs::write(root.join("write-check"), b"").is_err();

        let result = add(&repo, &name, b"v2");
        std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        assert_eq!(result.unwrap_err().kind(), ErrorKind::IoFailure);
        assert_eq!(repo.read(&name).unwrap(), b"v1");
    }
}
