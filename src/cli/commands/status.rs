//! status command - List tracked files and their latest snapshot

use crate::engine::{self, Context, Request, Response};
use crate::ui::output;
use anyhow::Result;

/// Print `<file>\t<latest timestamp>` per tracked file, or
/// `<file>\tuncommitted` when it has no snapshot yet.
///
/// With `json`, print the list as `[{"name": .., "latest": ..}]` where
/// `latest` is `null` for uncommitted files.
pub fn status(ctx: &Context, json: bool) -> Result<()> {
    let paths = super::repo_paths(ctx)?;

    let files = match engine::execute(&paths, Request::Status)? {
        Response::Status(files) => files,
        other => anyhow::bail!("unexpected response to status: {:?}", other),
    };

    if json {
        output::print(serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in files {
        match file.latest {
            Some(ts) => output::print(format!("{}\t{}", file.name, ts)),
            None => output::print(format!("{}\tuncommitted", file.name)),
        }
    }

    Ok(())
}
