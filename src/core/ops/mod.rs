//! core::ops
//!
//! Operation locking.
//!
//! # Modules
//!
//! - [`lock`] - Exclusive repo lock
//!
//! # Architecture
//!
//! Every mutating operation:
//! 1. Checks the repository exists
//! 2. Acquires the exclusive repo lock
//! 3. Performs its atomic writes
//! 4. Releases the lock on drop

pub mod lock;

pub use lock::{LockError, RepoLock};
