//! show command - Print a file's baseline or one of its snapshots

use crate::engine::{self, Context, Request, Response};
use crate::ui::output;
use anyhow::Result;

/// Write the requested content to stdout unchanged.
pub fn show(ctx: &Context, file: &str, timestamp: Option<&str>) -> Result<()> {
    let paths = super::repo_paths(ctx)?;

    let request = Request::Show {
        name: file.to_string(),
        timestamp: timestamp.map(str::to_string),
    };
    match engine::execute(&paths, request)? {
        Response::Content(bytes) => output::print_raw(&bytes)?,
        other => anyhow::bail!("unexpected response to show: {:?}", other),
    }

    Ok(())
}
