use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Policy(#[from] bump_core::PolicyError),

    #[error("config file error")]
    Config(#[from] crate::config::ConfigError),

    #[error("failed to read checkouts directory '{path}'")]
    Checkouts {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no checkout named '{name}' under '{dir}'")]
    RepoNotFound { name: String, dir: PathBuf },

    #[error("no author configured: pass --author or set 'author' in the config file")]
    MissingAuthor,

    #[error("no bug number configured: pass --bug or set 'bug' in the config file")]
    MissingBug,
}

pub type Result<T> = std::result::Result<T, CliError>;
