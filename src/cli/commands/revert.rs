//! revert command - Restore a file to one of its snapshots

use crate::core::atomic;
use crate::engine::{self, Context, Request, Response};
use crate::repo::RepoError;
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Revert `file` to the snapshot taken at `timestamp`.
///
/// The repository baseline is restored by the engine; with working-copy
/// sync on, the working file is rewritten with the same bytes. Prints
/// `'<file>' reverted to <timestamp>`.
pub fn revert(ctx: &Context, file: &str, timestamp: &str) -> Result<()> {
    let paths = super::repo_paths(ctx)?;

    let request = Request::Revert {
        name: file.to_string(),
        timestamp: timestamp.to_string(),
    };
    let (id, content) = match engine::execute(&paths, request)? {
        Response::Reverted { id, content } => (id, content),
        other => anyhow::bail!("unexpected response to revert: {:?}", other),
    };

    if ctx.sync_working_copy {
        let path = super::working_path(ctx, file)?;
        atomic::write_atomic(&path, &content)
            .map_err(|e| RepoError::io(format!("failed to write {}", path.display()), e))?;
    }

    output::success(
        format!("'{}' reverted to {}", id.name, id.timestamp),
        Verbosity::from_quiet(ctx.quiet),
    );
    Ok(())
}
