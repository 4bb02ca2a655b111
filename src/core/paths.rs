//! core::paths
//!
//! Centralized path routing for repository storage locations.
//!
//! **Hard rule:** no code outside this module joins repository-relative
//! paths by hand. Every location goes through [`RepoPaths`].
//!
//! # Storage Layout
//!
//! ```text
//! <root>/                 repository root (existence == initialized)
//! <root>/<name>           tracked-file baselines
//! <root>/commits/         snapshot store, one entry per snapshot
//! <root>/.vcs/lock        exclusive lock file
//! <root>/.vcs/clock       last issued commit timestamp
//! ```
//!
//! # Example
//!
//! ```
//! use myvcs::core::paths::RepoPaths;
//! use std::path::PathBuf;
//!
//! let paths = RepoPaths::new(PathBuf::from("/work/MyRepo"));
//! assert_eq!(paths.commits_dir(), PathBuf::from("/work/MyRepo/commits"));
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::{SnapshotId, TrackedName};

/// Name of the snapshot store directory under the root.
pub const COMMITS_DIR: &str = "commits";

/// Name of the internal bookkeeping directory under the root.
pub const INTERNAL_DIR: &str = ".vcs";

/// Centralized path routing for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    root: PathBuf,
}

impl RepoPaths {
    /// Create paths for the repository rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the repository root for a working directory and repo name.
    ///
    /// ```
    /// use myvcs::core::paths::RepoPaths;
    /// use std::path::{Path, PathBuf};
    ///
    /// let paths = RepoPaths::in_workdir(Path::new("/work"), "MyRepo");
    /// assert_eq!(paths.root(), Path::new("/work/MyRepo"));
    /// ```
    pub fn in_workdir(workdir: &Path, repo_name: &str) -> Self {
        Self::new(workdir.join(repo_name))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one entry per snapshot.
    pub fn commits_dir(&self) -> PathBuf {
        self.root.join(COMMITS_DIR)
    }

    /// Bookkeeping directory (lock, clock).
    pub fn internal_dir(&self) -> PathBuf {
        self.root.join(INTERNAL_DIR)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.internal_dir().join("lock")
    }

    pub fn clock_path(&self) -> PathBuf {
        self.internal_dir().join("clock")
    }

    /// The baseline copy of a tracked file.
    pub fn baseline_path(&self, name: &TrackedName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// The immutable entry for one snapshot.
    pub fn snapshot_path(&self, id: &SnapshotId) -> PathBuf {
        self.commits_dir().join(id.entry_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Timestamp;

    fn test_paths() -> RepoPaths {
        RepoPaths::new(PathBuf::from("/work/MyRepo"))
    }

    #[test]
    fn baseline_lives_at_root() {
        let name = TrackedName::new("notes.txt").unwrap();
        assert_eq!(
            test_paths().baseline_path(&name),
            PathBuf::from("/work/MyRepo/notes.txt")
        );
    }

    #[test]
    fn snapshot_lives_in_commits() {
        let id = SnapshotId::new(
            TrackedName::new("notes.txt").unwrap(),
            Timestamp::parse("20261018135501000000").unwrap(),
        );
        assert_eq!(
            test_paths().snapshot_path(&id),
            PathBuf::from("/work/MyRepo/commits/notes.txt.20261018135501000000")
        );
    }

    #[test]
    fn internal_files_are_hidden() {
        let paths = test_paths();
        assert_eq!(paths.lock_path(), PathBuf::from("/work/MyRepo/.vcs/lock"));
        assert_eq!(paths.clock_path(), PathBuf::from("/work/MyRepo/.vcs/clock"));
    }
}
