//! repo::clock
//!
//! Monotonic commit timestamps.
//!
//! Wall-clock time alone cannot order commits: two commits can land in the
//! same microsecond, and the system clock can step backwards. The clock
//! therefore persists the last issued value in `<root>/.vcs/clock` and
//! issues
//!
//! ```text
//! max(now, last_issued + 1µs, floor + 1µs)
//! ```
//!
//! where `floor` is the newest existing snapshot of the file being
//! committed. Issuing requires the repository lock, so the sequence is
//! strictly increasing across every process working on the repository.

use std::fs;
use std::io;

use tracing::{debug, warn};

use super::{RepoError, RepoResult};
use crate::core::atomic;
use crate::core::ops::lock::RepoLock;
use crate::core::paths::RepoPaths;
use crate::core::types::Timestamp;

/// Issues commit timestamps for one repository.
#[derive(Debug, Clone)]
pub struct CommitClock {
    paths: RepoPaths,
}

impl CommitClock {
    pub fn new(paths: RepoPaths) -> Self {
        Self { paths }
    }

    /// The last timestamp this clock issued, if any.
    pub fn last_issued(&self) -> RepoResult<Option<Timestamp>> {
        let path = self.paths.clock_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepoError::io(
                    format!("failed to read {}", path.display()),
                    e,
                ))
            }
        };

        let parsed = contents
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Timestamp::from_micros);
        if parsed.is_none() {
            warn!(path = %path.display(), "ignoring unreadable commit clock");
        }
        Ok(parsed)
    }

    /// Issue the next timestamp, strictly greater than every timestamp
    /// issued before and than `floor`.
    ///
    /// `_lock` proves the caller holds the repository lock.
    pub fn issue(&self, _lock: &RepoLock, floor: Option<Timestamp>) -> RepoResult<Timestamp> {
        self.issue_at(Timestamp::now(), floor)
    }

    fn issue_at(&self, now: Timestamp, floor: Option<Timestamp>) -> RepoResult<Timestamp> {
        let next = [self.last_issued()?, floor]
            .into_iter()
            .flatten()
            .map(|ts| ts.successor())
            .fold(now, Ord::max);

        let path = self.paths.clock_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| RepoError::io(format!("failed to create {}", dir.display()), e))?;
        }
        atomic::write_atomic(&path, next.as_micros().to_string().as_bytes())
            .map_err(|e| RepoError::io(format!("failed to write {}", path.display()), e))?;

        debug!(timestamp = %next, "issued commit timestamp");
        Ok(next)
    }
}
