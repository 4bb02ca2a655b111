//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--repo <name>`: Repository directory inside the working directory
//! - `--no-sync`: Do not touch the working file on commit/revert
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// myvcs - per-file snapshot version control
#[derive(Parser, Debug)]
#[command(name = "myvcs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if myvcs was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Repository directory name (default: MyRepo, or MYVCS_REPO)
    #[arg(long, global = true, value_name = "NAME")]
    pub repo: Option<String>,

    /// Do not read or write the working file on commit and revert
    #[arg(long, global = true)]
    pub no_sync: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the repository in the working directory
    #[command(
        name = "init",
        long_about = "Create the repository directory and its snapshot store.\n\n\
            Running init on an existing repository changes nothing and reports \
            that the repository already exists."
    )]
    Init,

    /// Stage a working file as the tracked baseline
    #[command(
        name = "add",
        long_about = "Copy a file from the working directory into the repository.\n\n\
            This is the only way to start tracking a file. Adding again replaces \
            the baseline without creating history.",
        after_help = "\
WORKFLOW EXAMPLES:
    myvcs add notes.txt
    myvcs commit notes.txt"
    )]
    Add {
        /// File name, relative to the working directory
        file: String,
    },

    /// Snapshot the current baseline of a file
    #[command(
        name = "commit",
        long_about = "Record an immutable, timestamped snapshot of a tracked file.\n\n\
            Unless --no-sync is given, the working file is staged first so the \
            snapshot captures what is on disk. The file must have been added before."
    )]
    Commit {
        /// Tracked file name
        file: String,
    },

    /// Restore a file to one of its snapshots
    #[command(
        name = "revert",
        long_about = "Overwrite a file's baseline with the snapshot taken at TIMESTAMP.\n\n\
            Unless --no-sync is given, the working file is rewritten too. History is \
            not changed: every snapshot stays available.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Find the timestamp to go back to
    myvcs log notes.txt

    myvcs revert notes.txt 20261018135501000000"
    )]
    Revert {
        /// Tracked file name
        file: String,
        /// Snapshot timestamp, as printed by `myvcs log <file>`
        timestamp: String,
    },

    /// List snapshots
    #[command(
        name = "log",
        long_about = "Without FILE, list every snapshot entry in the repository. With FILE, \
            list that file's snapshot timestamps, oldest first."
    )]
    Log {
        /// Only list timestamps of this file
        file: Option<String>,

        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Print a file's baseline or one of its snapshots
    #[command(name = "show")]
    Show {
        /// Tracked file name
        file: String,
        /// Snapshot timestamp (defaults to the current baseline)
        timestamp: Option<String>,
    },

    /// List tracked files and their latest snapshot
    #[command(name = "status")]
    Status {
        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    myvcs completion bash > ~/.local/share/bash-completion/completions/myvcs

    # Zsh
    myvcs completion zsh > ~/.zfunc/_myvcs"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by `completion`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
