mod changelog;
mod entry;
mod error;

pub use changelog::{Changelog, prepend_to_files};
pub use entry::{BatchStamp, ChangelogEntry};
pub use error::ChangelogError;

pub type Result<T> = std::result::Result<T, ChangelogError>;
