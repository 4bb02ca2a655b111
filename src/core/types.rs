//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`TrackedName`] - Validated name of a tracked file
//! - [`Timestamp`] - Fixed-width, lexically sortable commit timestamp
//! - [`SnapshotId`] - A (name, timestamp) pair naming one snapshot entry
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so a snapshot entry name can always be split
//! back into exactly one (name, timestamp) pair.
//!
//! # Examples
//!
//! ```
//! use myvcs::core::types::{SnapshotId, Timestamp, TrackedName};
//!
//! let name = TrackedName::new("notes.txt").unwrap();
//! let ts = Timestamp::parse("20261018135501000042").unwrap();
//! let id = SnapshotId::new(name, ts);
//! assert_eq!(id.to_string(), "notes.txt.20261018135501000042");
//!
//! assert!(TrackedName::new("../escape").is_err());
//! assert!(Timestamp::parse("2026-10-18").is_err());
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between the file name and the timestamp in a snapshot entry.
pub const SNAPSHOT_SEPARATOR: char = '.';

/// Names that would collide with repository bookkeeping.
const RESERVED_NAMES: [&str; 1] = ["commits"];

/// Number of digits in an encoded [`Timestamp`].
const TIMESTAMP_WIDTH: usize = 20;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid snapshot id: {0}")]
    InvalidSnapshotId(String),
}

/// Check that `name` is a single, visible path component.
///
/// This is every rule of [`TrackedName`] except the reserved names, and is
/// also applied to the repository directory name.
pub fn validate_component(name: &str) -> Result<(), TypeError> {
    if name.is_empty() {
        return Err(TypeError::InvalidName("file name cannot be empty".into()));
    }

    if name.starts_with('.') {
        return Err(TypeError::InvalidName(format!(
            "'{name}' cannot start with '.'"
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(TypeError::InvalidName(format!(
            "'{name}' must be a file name, not a path"
        )));
    }

    if name.chars().any(|c| c.is_control()) {
        return Err(TypeError::InvalidName(
            "file name cannot contain control characters".into(),
        ));
    }

    Ok(())
}

/// A validated tracked-file name.
///
/// A tracked name is a single path component relative to the repository
/// root:
/// - Cannot be empty, `.` or `..`
/// - Cannot start with `.` (reserved for repository internals)
/// - Cannot contain `/`, `\` or ASCII control characters
/// - Cannot be a reserved name (`commits`)
///
/// # Example
///
/// ```
/// use myvcs::core::types::TrackedName;
///
/// let name = TrackedName::new("a.txt.bak").unwrap();
/// assert_eq!(name.as_str(), "a.txt.bak");
///
/// assert!(TrackedName::new("").is_err());
/// assert!(TrackedName::new(".hidden").is_err());
/// assert!(TrackedName::new("dir/file").is_err());
/// assert!(TrackedName::new("commits").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackedName(String);

impl TrackedName {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidName` if the name is not a plain file name.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        validate_component(name)?;

        if RESERVED_NAMES.contains(&name) {
            return Err(TypeError::InvalidName(format!("'{name}' is reserved")));
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrackedName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackedName> for String {
    fn from(name: TrackedName) -> Self {
        name.0
    }
}

impl std::fmt::Display for TrackedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A commit timestamp.
///
/// UTC with microsecond resolution, encoded as exactly 20 ASCII digits
/// (`YYYYMMDDHHMMSSffffff`). The encoding is fixed-width, so lexical
/// order equals chronological order, and it never contains
/// [`SNAPSHOT_SEPARATOR`].
///
/// # Example
///
/// ```
/// use myvcs::core::types::Timestamp;
///
/// let a = Timestamp::parse("20261018135501000000").unwrap();
/// let b = a.successor();
/// assert!(b > a);
/// assert_eq!(b.to_string(), "20261018135501000001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create a timestamp from a chrono DateTime, truncated to microseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let micros = dt.timestamp_micros();
        Self(DateTime::from_timestamp_micros(micros).unwrap_or(dt))
    }

    /// Create a timestamp from microseconds since the Unix epoch.
    pub fn from_micros(micros: i64) -> Option<Self> {
        DateTime::from_timestamp_micros(micros).map(Self)
    }

    /// Microseconds since the Unix epoch.
    pub fn as_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The smallest timestamp strictly after this one.
    pub fn successor(&self) -> Self {
        Self(self.0 + chrono::Duration::microseconds(1))
    }

    /// Parse the fixed-width 20-digit encoding.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidTimestamp` for any other shape or for
    /// digits that do not form a real calendar instant.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidTimestamp(format!("'{s}'"));

        if s.len() != TIMESTAMP_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let field = |range: std::ops::Range<usize>| -> Result<u32, TypeError> {
            s[range].parse::<u32>().map_err(|_| invalid())
        };

        let year = i32::try_from(field(0..4)?).map_err(|_| invalid())?;
        let date = NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?).ok_or_else(invalid)?;
        let dt = date
            .and_hms_micro_opt(field(8..10)?, field(10..12)?, field(12..14)?, field(14..20)?)
            .ok_or_else(invalid)?;

        Ok(Self(dt.and_utc()))
    }

    /// The fixed-width encoding used in snapshot entry names.
    pub fn encode(&self) -> String {
        let dt = &self.0;
        format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}{:06}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.timestamp_subsec_micros()
        )
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.encode()
    }
}

/// Identifier of one snapshot entry: `<name>.<timestamp>`.
///
/// The timestamp never contains the separator, so splitting on the last
/// separator recovers the name exactly, even when the name itself has
/// dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotId {
    pub name: TrackedName,
    pub timestamp: Timestamp,
}

impl SnapshotId {
    pub fn new(name: TrackedName, timestamp: Timestamp) -> Self {
        Self { name, timestamp }
    }

    /// Parse a snapshot entry name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidSnapshotId` if the entry has no separator,
    /// or if either half fails validation.
    pub fn parse(entry: &str) -> Result<Self, TypeError> {
        let (name, ts) = entry
            .rsplit_once(SNAPSHOT_SEPARATOR)
            .ok_or_else(|| TypeError::InvalidSnapshotId(format!("'{entry}' has no separator")))?;

        let name = TrackedName::new(name)
            .map_err(|e| TypeError::InvalidSnapshotId(format!("'{entry}': {e}")))?;
        let timestamp = Timestamp::parse(ts)
            .map_err(|e| TypeError::InvalidSnapshotId(format!("'{entry}': {e}")))?;

        Ok(Self { name, timestamp })
    }

    /// The on-disk entry name.
    pub fn entry_name(&self) -> String {
        format!("{}{}{}", self.name, SNAPSHOT_SEPARATOR, self.timestamp)
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.entry_name())
    }
}
