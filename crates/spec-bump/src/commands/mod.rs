mod bump;
mod scan;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use bump_core::Author;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify every checkout against the target versions, touching nothing
    Scan(ScanArgs),
    /// Rewrite metadata and changelogs of eligible checkouts and commit the result
    Bump(BumpArgs),
}

#[derive(Args)]
pub(crate) struct PolicyArgs {
    /// Component version to write, e.g. "4.6.0"
    #[arg(long = "target-version", value_name = "VERSION")]
    pub target_version: String,

    /// Distribution-level version for repositories on the distro scheme, e.g. "15.6.0"
    #[arg(long = "alternate-version", value_name = "VERSION")]
    pub alternate_version: String,

    /// Process only the checkout with this name
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,
}

#[derive(Args)]
pub(crate) struct ScanArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Args)]
pub(crate) struct BumpArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Bug number referenced from the changelog entry as bsc#N
    #[arg(long, value_name = "N")]
    pub bug: Option<String>,

    /// Changelog attribution, "Name <email>"
    #[arg(long, value_name = "AUTHOR")]
    pub author: Option<Author>,

    /// Config file (default: spec-bump.toml inside the checkouts directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show each repository's diff and ask before committing
    #[arg(long)]
    pub confirm: bool,

    /// Report what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite files but leave the commit to the operator
    #[arg(long)]
    pub no_commit: bool,
}

impl Commands {
    pub(crate) fn execute(self, checkouts: &Path) -> Result<()> {
        match self {
            Self::Scan(args) => scan::run(&args, checkouts),
            Self::Bump(args) => bump::run(&args, checkouts),
        }
    }
}

/// Flattens an error and its source chain into one report line.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
