//! myvcs - per-file snapshot version control
//!
//! A small version-control core that tracks files one at a time: files are
//! added to a repository, committed as immutable timestamped snapshots, and
//! reverted to any earlier snapshot.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, renders output)
//! - [`engine`] - Structured request/response boundary
//! - [`repo`] - Repository, staging, snapshot store, history, revert
//! - [`core`] - Strong types, paths, locking, atomic writes, config
//! - [`ui`] - Output helpers
//!
//! # Correctness Invariants
//!
//! 1. Snapshots are immutable and never deleted
//! 2. A file's snapshot timestamps are strictly increasing
//! 3. Every mutating write is atomic; readers never see partial content
//! 4. Mutations are serialized by a per-repository lock

pub mod cli;
pub mod core;
pub mod engine;
pub mod repo;
pub mod ui;
