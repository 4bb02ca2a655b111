//! add command - Stage a working file as the tracked baseline

use crate::engine::{self, Context, Request, Response};
use crate::repo::{RepoError, Repository};
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Copy `<workdir>/<file>` into the repository.
///
/// Prints `'<file>' added to repository`.
pub fn add(ctx: &Context, file: &str) -> Result<()> {
    let paths = super::repo_paths(ctx)?;
    Repository::open(paths.root())?;

    let content = super::read_working_copy(ctx, file)?.ok_or_else(|| {
        RepoError::io(
            format!("cannot add '{}'", file),
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file in the working directory",
            ),
        )
    })?;

    let request = Request::Add {
        name: file.to_string(),
        content,
    };
    match engine::execute(&paths, request)? {
        Response::Added { name } => output::success(
            format!("'{}' added to repository", name),
            Verbosity::from_quiet(ctx.quiet),
        ),
        other => anyhow::bail!("unexpected response to add: {:?}", other),
    }

    Ok(())
}
