use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no package metadata files under '{dir}'")]
    NoMetadataFiles { dir: PathBuf },

    #[error("no 'Version:' line in '{path}'")]
    MissingVersionField { path: PathBuf },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
