//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration into an [`engine::Context`]
//! - Move bytes between the working directory and engine requests
//! - Render responses as the textual protocol
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`crate::engine`], which owns every repository mutation.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::{schema::validate_repo_name, Config};
use crate::engine;
use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.global_path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    // CLI flags take precedence over config.
    let repo_name = match cli.repo {
        Some(name) => {
            validate_repo_name(&name)?;
            name
        }
        None => config.repo_name().to_string(),
    };

    let ctx = engine::Context {
        cwd: cli.cwd,
        repo_name,
        quiet: cli.quiet,
        sync_working_copy: !cli.no_sync && config.sync_working_copy(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--debug` enables this crate's debug events.
fn init_tracing(debug: bool) {
    let default = if debug { "myvcs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
