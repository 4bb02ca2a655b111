//! repo
//!
//! The version-control core: a per-file snapshot store.
//!
//! # Modules
//!
//! - [`staging`] - `add`: write a file's baseline
//! - [`snapshot`] - Immutable snapshot entries and `commit`
//! - [`clock`] - Monotonic, repository-wide commit timestamps
//! - [`history`] - Read-side projection over the snapshot store
//! - [`revert`] - Restore a baseline from a snapshot
//! - [`error`] - Error taxonomy
//!
//! # Invariants
//!
//! - The repository root existing is the only "initialized" signal
//! - A file can only be committed after it has been added
//! - Snapshots are never modified or deleted
//! - Every mutating write is atomic at the file level
//!
//! # Example
//!
//! ```no_run
//! use myvcs::core::types::TrackedName;
//! use myvcs::repo::Repository;
//!
//! let repo = Repository::at("MyRepo");
//! repo.init()?;
//!
//! let name = TrackedName::new("notes.txt")?;
//! repo.add(&name, b"v1")?;
//! let first = repo.commit(&name)?;
//! repo.add(&name, b"v2")?;
//! repo.commit(&name)?;
//!
//! repo.revert(&name, &first.timestamp)?;
//! assert_eq!(repo.read(&name)?, b"v1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod error;
pub mod history;
pub mod revert;
pub mod snapshot;
pub mod staging;

pub use error::{ErrorKind, RepoError, RepoResult};
pub use history::{DirectoryHistory, HistoryIndex};
pub use snapshot::SnapshotStore;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::ops::lock::RepoLock;
use crate::core::paths::RepoPaths;
use crate::core::types::{SnapshotId, Timestamp, TrackedName};

/// Result of [`Repository::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The repository root was created.
    Created,
    /// The root already existed; nothing was changed.
    AlreadyExists,
}

/// A repository rooted at a directory.
///
/// Constructing a `Repository` never touches the filesystem; every
/// operation other than [`init`](Self::init) and [`exists`](Self::exists)
/// fails with [`RepoError::NotInitialized`] when the root is missing.
#[derive(Debug, Clone)]
pub struct Repository {
    paths: RepoPaths,
}

impl Repository {
    /// A handle on the repository at `root`, initialized or not.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: RepoPaths::new(root.into()),
        }
    }

    /// Open an existing repository.
    ///
    /// # Errors
    ///
    /// [`RepoError::NotInitialized`] if `root` does not exist.
    pub fn open(root: impl Into<PathBuf>) -> RepoResult<Self> {
        let repo = Self::at(root);
        repo.ensure_exists()?;
        Ok(repo)
    }

    pub fn paths(&self) -> &RepoPaths {
        &self.paths
    }

    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Whether the repository has been initialized.
    pub fn exists(&self) -> bool {
        self.root().is_dir()
    }

    fn ensure_exists(&self) -> RepoResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(RepoError::NotInitialized(self.root().to_path_buf()))
        }
    }

    /// Create the repository root and its snapshot store.
    ///
    /// Idempotent: an existing root yields [`InitOutcome::AlreadyExists`]
    /// and its content is left untouched.
    pub fn init(&self) -> RepoResult<InitOutcome> {
        let root = self.root();

        if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RepoError::io(format!("failed to create {}", parent.display()), e)
            })?;
        }

        // create_dir (not create_dir_all) is the atomic existence test when
        // two inits race.
        match fs::create_dir(root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if !root.is_dir() {
                    return Err(RepoError::io(
                        format!("cannot initialize {}", root.display()),
                        io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
                    ));
                }
                debug!(root = %root.display(), "repository already exists");
                return Ok(InitOutcome::AlreadyExists);
            }
            Err(e) => {
                return Err(RepoError::io(
                    format!("failed to create {}", root.display()),
                    e,
                ))
            }
        }

        for dir in [self.paths.commits_dir(), self.paths.internal_dir()] {
            fs::create_dir_all(&dir)
                .map_err(|e| RepoError::io(format!("failed to create {}", dir.display()), e))?;
        }

        info!(root = %root.display(), "initialized repository");
        Ok(InitOutcome::Created)
    }

    /// Acquire the exclusive repository lock.
    pub(crate) fn lock(&self) -> RepoResult<RepoLock> {
        self.ensure_exists()?;
        Ok(RepoLock::acquire(&self.paths)?)
    }

    /// Whether `name` has a baseline.
    pub fn is_tracked(&self, name: &TrackedName) -> bool {
        self.paths.baseline_path(name).is_file()
    }

    /// Read the current baseline of `name`.
    ///
    /// # Errors
    ///
    /// - [`RepoError::NotInitialized`] if the repository does not exist
    /// - [`RepoError::NoBaseline`] if `name` was never added
    pub fn read(&self, name: &TrackedName) -> RepoResult<Vec<u8>> {
        self.ensure_exists()?;
        let path = self.paths.baseline_path(name);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(RepoError::NoBaseline(name.to_string()))
            }
            Err(e) => Err(RepoError::io(format!("failed to read {}", path.display()), e)),
        }
    }

    /// Names of every file with a baseline, sorted.
    pub fn tracked_files(&self) -> RepoResult<Vec<TrackedName>> {
        self.ensure_exists()?;
        let root = self.root();
        let entries = fs::read_dir(root)
            .map_err(|e| RepoError::io(format!("failed to list {}", root.display()), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| RepoError::io(format!("failed to list {}", root.display()), e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            let name = entry
                .file_name()
                .into_string()
                .ok()
                .and_then(|s| TrackedName::new(s).ok());
            if let (true, Some(name)) = (is_file, name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// The snapshot store of this repository.
    pub fn store(&self) -> SnapshotStore {
        SnapshotStore::new(self.paths.clone())
    }

    /// The history index of this repository.
    pub fn history(&self) -> DirectoryHistory {
        DirectoryHistory::new(self.store())
    }

    /// Stage `content` as the baseline of `name`.
    pub fn add(&self, name: &TrackedName, content: &[u8]) -> RepoResult<()> {
        staging::add(self, name, content)
    }

    /// Snapshot the current baseline of `name`.
    pub fn commit(&self, name: &TrackedName) -> RepoResult<SnapshotId> {
        snapshot::commit(self, name)
    }

    /// Snapshot `name`, replacing its baseline with `refresh` first.
    pub fn commit_with(
        &self,
        name: &TrackedName,
        refresh: Option<&[u8]>,
    ) -> RepoResult<SnapshotId> {
        snapshot::commit_with(self, name, refresh)
    }

    /// Restore the baseline of `name` to the snapshot taken at `timestamp`,
    /// returning the restored bytes.
    pub fn revert(
        &self,
        name: &TrackedName,
        timestamp: &Timestamp,
    ) -> RepoResult<(SnapshotId, Vec<u8>)> {
        revert::revert(self, name, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name(s: &str) -> TrackedName {
        TrackedName::new(s).unwrap()
    }

    #[test]
    fn init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));

        assert!(!repo.exists());
        assert_eq!(repo.init().unwrap(), InitOutcome::Created);
        assert!(repo.exists());
        assert!(repo.paths().commits_dir().is_dir());
    }

    #[test]
    fn init_twice_reports_already_exists() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        repo.init().unwrap();
        repo.add(&name("a.txt"), b"keep me").unwrap();

        assert_eq!(repo.init().unwrap(), InitOutcome::AlreadyExists);
        assert_eq!(repo.read(&name("a.txt")).unwrap(), b"keep me");
    }

    #[test]
    fn init_over_a_file_fails() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("MyRepo");
        fs::write(&root, b"not a dir").unwrap();

        let err = Repository::at(&root).init().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn open_missing_is_not_initialized() {
        let temp = TempDir::new().unwrap();
        let err = Repository::open(temp.path().join("MyRepo")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotInitialized);
    }

    #[test]
    fn operations_on_missing_repo_are_not_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        let n = name("a.txt");

        assert_eq!(repo.add(&n, b"x").unwrap_err().kind(), ErrorKind::NotInitialized);
        assert_eq!(repo.commit(&n).unwrap_err().kind(), ErrorKind::NotInitialized);
        assert_eq!(repo.read(&n).unwrap_err().kind(), ErrorKind::NotInitialized);
        assert_eq!(
            repo.revert(&n, &Timestamp::now()).unwrap_err().kind(),
            ErrorKind::NotInitialized
        );
        // The failed operations must not have created the root.
        assert!(!repo.exists());
    }

    #[test]
    fn read_untracked_is_no_baseline() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        repo.init().unwrap();

        assert_eq!(
            repo.read(&name("a.txt")).unwrap_err().kind(),
            ErrorKind::NoBaseline
        );
    }

    #[test]
    fn tracked_files_skips_internals() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::at(temp.path().join("MyRepo"));
        repo.init().unwrap();
        repo.add(&name("b.txt"), b"b").unwrap();
        repo.add(&name("a.txt"), b"a").unwrap();
        repo.commit(&name("a.txt")).unwrap();

        assert_eq!(repo.tracked_files().unwrap(), vec![name("a.txt"), name("b.txt")]);
    }
}
