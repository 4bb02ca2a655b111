//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All command output goes through this module so quiet mode is honored
//! in one place. Diagnostics go to stderr through `tracing`; stdout only
//! carries the protocol lines and query results.

pub mod output;
