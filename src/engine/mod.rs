//! engine
//!
//! Structured request/response boundary over the repository core.
//!
//! # Architecture
//!
//! Each user action becomes one [`Request`]. [`execute`] validates its
//! arguments, runs it against the repository and returns a [`Response`]
//! or a typed [`RepoError`]. Nothing here writes to stdout: rendering the
//! textual protocol is the CLI's job, which keeps the engine usable from
//! any other front end.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::core::paths::RepoPaths;
use crate::core::types::{SnapshotId, Timestamp, TrackedName};
use crate::repo::{HistoryIndex, InitOutcome, RepoError, RepoResult, Repository};

/// Execution context for commands.
///
/// Contains settings derived from CLI flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Repository directory name inside the working directory.
    pub repo_name: String,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Synchronize the working file on commit and revert.
    pub sync_working_copy: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            repo_name: crate::core::config::DEFAULT_REPO_NAME.to_string(),
            quiet: false,
            sync_working_copy: true,
        }
    }
}

impl Context {
    /// The effective working directory.
    pub fn workdir(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Paths of the repository this context points at.
    pub fn repo_paths(&self) -> std::io::Result<RepoPaths> {
        Ok(RepoPaths::in_workdir(&self.workdir()?, &self.repo_name))
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Init,
    Add {
        name: String,
        content: Vec<u8>,
    },
    /// Commit `name`. When `refresh` is set it replaces the baseline
    /// first, under the same lock as the snapshot; `name` must already
    /// be tracked.
    Commit {
        name: String,
        refresh: Option<Vec<u8>>,
    },
    Revert {
        name: String,
        timestamp: String,
    },
    /// All snapshots, or the timestamps of one file.
    Log {
        name: Option<String>,
    },
    /// The baseline of a file, or one of its snapshots.
    Show {
        name: String,
        timestamp: Option<String>,
    },
    Status,
}

/// Tracking state of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub name: TrackedName,
    pub latest: Option<Timestamp>,
}

/// Outcome of a successful [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Initialized { root: PathBuf },
    AlreadyExists { root: PathBuf },
    Added { name: TrackedName },
    Committed { id: SnapshotId },
    /// `content` is the restored baseline, for syncing the working copy.
    Reverted { id: SnapshotId, content: Vec<u8> },
    Commits(Vec<SnapshotId>),
    Timestamps {
        name: TrackedName,
        timestamps: Vec<Timestamp>,
    },
    Content(Vec<u8>),
    Status(Vec<FileStatus>),
}

fn parse_name(name: &str) -> RepoResult<TrackedName> {
    if name.is_empty() {
        return Err(RepoError::InvalidArgument("a file name is required".into()));
    }
    Ok(TrackedName::new(name)?)
}

/// A timestamp that does not parse cannot name any snapshot.
fn parse_timestamp(name: &TrackedName, timestamp: &str) -> RepoResult<Timestamp> {
    if timestamp.is_empty() {
        return Err(RepoError::InvalidArgument("a timestamp is required".into()));
    }
    Timestamp::parse(timestamp).map_err(|_| RepoError::SnapshotNotFound {
        name: name.to_string(),
        timestamp: timestamp.to_string(),
    })
}

/// Run one request against the repository at `paths`.
pub fn execute(paths: &RepoPaths, request: Request) -> RepoResult<Response> {
    debug!(?request, root = %paths.root().display(), "executing");
    let repo = Repository::at(paths.root());
    let root = repo.root().to_path_buf();

    match request {
        Request::Init => Ok(match repo.init()? {
            InitOutcome::Created => Response::Initialized { root },
            InitOutcome::AlreadyExists => Response::AlreadyExists { root },
        }),

        Request::Add { name, content } => {
            let name = parse_name(&name)?;
            repo.add(&name, &content)?;
            Ok(Response::Added { name })
        }

        Request::Commit { name, refresh } => {
            let name = parse_name(&name)?;
            let id = repo.commit_with(&name, refresh.as_deref())?;
            Ok(Response::Committed { id })
        }

        Request::Revert { name, timestamp } => {
            let name = parse_name(&name)?;
            let repo = Repository::open(&root)?;
            let timestamp = parse_timestamp(&name, &timestamp)?;
            let (id, content) = repo.revert(&name, &timestamp)?;
            Ok(Response::Reverted { id, content })
        }

        Request::Log { name: None } => {
            let repo = Repository::open(&root)?;
            Ok(Response::Commits(repo.history().list_commits()?))
        }

        Request::Log { name: Some(name) } => {
            let name = parse_name(&name)?;
            let repo = Repository::open(&root)?;
            let timestamps = repo.history().timestamps_for(&name)?;
            Ok(Response::Timestamps { name, timestamps })
        }

        Request::Show {
            name,
            timestamp: None,
        } => {
            let name = parse_name(&name)?;
            Ok(Response::Content(repo.read(&name)?))
        }

        Request::Show {
            name,
            timestamp: Some(timestamp),
        } => {
            let name = parse_name(&name)?;
            let repo = Repository::open(&root)?;
            let timestamp = parse_timestamp(&name, &timestamp)?;
            let content = repo.store().read(&SnapshotId::new(name, timestamp))?;
            Ok(Response::Content(content))
        }

        Request::Status => {
            let repo = Repository::open(&root)?;
            let history = repo.history();
            let commits = history.list_commits()?;
            let status = repo
                .tracked_files()?
                .into_iter()
                .map(|name| {
                    let latest = commits
                        .iter()
                        .filter(|id| id.name == name)
                        .map(|id| id.timestamp)
                        .max();
                    FileStatus { name, latest }
                })
                .collect();
            Ok(Response::Status(status))
        }
    }
}
