//! init command - Create the repository in the working directory

use crate::engine::{self, Context, Request, Response};
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Create the repository.
///
/// Prints `Initialized empty VCS repository in <root>`, or
/// `Repository already exists at <root>` when it was already there.
pub fn init(ctx: &Context) -> Result<()> {
    let paths = super::repo_paths(ctx)?;
    let verbosity = Verbosity::from_quiet(ctx.quiet);

    match engine::execute(&paths, Request::Init)? {
        Response::Initialized { root } => output::success(
            format!("Initialized empty VCS repository in {}", root.display()),
            verbosity,
        ),
        Response::AlreadyExists { root } => output::success(
            format!("Repository already exists at {}", root.display()),
            verbosity,
        ),
        other => anyhow::bail!("unexpected response to init: {:?}", other),
    }

    Ok(())
}
