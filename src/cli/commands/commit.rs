//! commit command - Snapshot the current baseline of a file

use crate::engine::{self, Context, Request, Response};
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Commit `file`.
///
/// With working-copy sync on, the working file is staged first so the
/// snapshot captures what the caller last saved. Prints
/// `'<file>' committed at <timestamp>`.
pub fn commit(ctx: &Context, file: &str) -> Result<()> {
    let paths = super::repo_paths(ctx)?;
    let verbosity = Verbosity::from_quiet(ctx.quiet);

    let refresh = if ctx.sync_working_copy {
        let working = super::read_working_copy(ctx, file)?;
        if working.is_none() {
            output::warn(
                format!("no working copy of '{}'; committing the staged baseline", file),
                verbosity,
            );
        }
        working
    } else {
        None
    };

    let request = Request::Commit {
        name: file.to_string(),
        refresh,
    };
    match engine::execute(&paths, request)? {
        Response::Committed { id } => output::success(
            format!("'{}' committed at {}", id.name, id.timestamp),
            verbosity,
        ),
        other => anyhow::bail!("unexpected response to commit: {:?}", other),
    }

    Ok(())
}
