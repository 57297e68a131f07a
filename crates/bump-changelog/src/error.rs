use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changes file at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changes file at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
