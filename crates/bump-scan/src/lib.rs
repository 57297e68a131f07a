mod discovery;
mod error;
mod scanner;

pub use discovery::{changes_files, spec_files};
pub use error::ScanError;
pub use scanner::{RepoScan, classify, read_versions, rewrite_versions, scan_repository};

pub type Result<T> = std::result::Result<T, ScanError>;
