//! core
//!
//! Core domain types and infrastructure.
//!
//! # Modules
//!
//! - [`types`] - Strong types: TrackedName, Timestamp, SnapshotId
//! - [`paths`] - Centralized path routing for repository storage
//! - [`atomic`] - Temp-file-then-rename writes
//! - [`ops`] - Repository locking
//! - [`config`] - Configuration schema and loading

pub mod atomic;
pub mod config;
pub mod ops;
pub mod paths;
pub mod types;
