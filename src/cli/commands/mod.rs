//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Builds an [`engine::Request`](crate::engine::Request), reading the
//!    working file where the verb needs it
//! 3. Calls the engine and renders the response
//!
//! Handlers do NOT perform repository mutations directly. The only file a
//! handler writes is the caller's working copy after a revert.

mod add;
mod commit;
mod completion;
mod init;
mod log_cmd;
mod revert;
mod show;
mod status;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use commit::commit;
pub use completion::completion;
pub use init::init;
pub use log_cmd::log;
pub use revert::revert;
pub use show::show;
pub use status::status;

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::cli::args::Command;
use crate::core::types::TrackedName;
use crate::engine::Context;
use crate::repo::{RepoError, RepoResult};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init => init::init(ctx),
        Command::Add { file } => add::add(ctx, &file),
        Command::Commit { file } => commit::commit(ctx, &file),
        Command::Revert { file, timestamp } => revert::revert(ctx, &file, &timestamp),
        Command::Log { file, json } => log_cmd::log(ctx, file.as_deref(), json),
        Command::Show { file, timestamp } => show::show(ctx, &file, timestamp.as_deref()),
        Command::Status { json } => status::status(ctx, json),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Location of `file` in the caller's working directory.
///
/// The name is validated first so it can never escape the working
/// directory.
fn working_path(ctx: &Context, file: &str) -> RepoResult<PathBuf> {
    let name = TrackedName::new(file)?;
    let workdir = ctx
        .workdir()
        .map_err(|e| RepoError::io("failed to determine working directory", e))?;
    Ok(workdir.join(name.as_str()))
}

/// Read the working copy of `file`, or `None` if it does not exist.
fn read_working_copy(ctx: &Context, file: &str) -> RepoResult<Option<Vec<u8>>> {
    let path = working_path(ctx, file)?;
    match fs::read(&path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RepoError::io(format!("failed to read {}", path.display()), e)),
    }
}

/// Repository paths for the context, as a repository error.
fn repo_paths(ctx: &Context) -> RepoResult<crate::core::paths::RepoPaths> {
    ctx.repo_paths()
        .map_err(|e| RepoError::io("failed to determine working directory", e))
}
