//! log command - List snapshots
//!
//! Without a file this is the undifferentiated commit log: every snapshot
//! entry name, sorted. With a file it lists that file's timestamps, oldest
//! first, so the last line is the newest snapshot.

use serde::Serialize;

use crate::engine::{self, Context, Request, Response};
use crate::ui::output;
use anyhow::Result;

#[derive(Serialize)]
struct LogEntry {
    entry: String,
    file: String,
    timestamp: String,
}

/// List snapshots.
pub fn log(ctx: &Context, file: Option<&str>, json: bool) -> Result<()> {
    let paths = super::repo_paths(ctx)?;

    let request = Request::Log {
        name: file.map(str::to_string),
    };
    match engine::execute(&paths, request)? {
        Response::Commits(ids) => {
            if json {
                let entries: Vec<_> = ids
                    .iter()
                    .map(|id| LogEntry {
                        entry: id.entry_name(),
                        file: id.name.to_string(),
                        timestamp: id.timestamp.to_string(),
                    })
                    .collect();
                output::print(serde_json::to_string_pretty(&entries)?);
            } else if !ids.is_empty() {
                output::print(output::format_list(&ids));
            }
        }
        Response::Timestamps { timestamps, .. } => {
            if json {
                output::print(serde_json::to_string_pretty(&timestamps)?);
            } else if !timestamps.is_empty() {
                output::print(output::format_list(&timestamps));
            }
        }
        other => anyhow::bail!("unexpected response to log: {:?}", other),
    }

    Ok(())
}
