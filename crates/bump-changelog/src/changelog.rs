use std::path::{Path, PathBuf};

use crate::entry::ChangelogEntry;
use crate::error::ChangelogError;

/// In-memory copy of one changes file, newest entry first.
#[derive(Debug, Clone)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    /// # Errors
    ///
    /// Returns [`ChangelogError::Read`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Prepends the rendered entry verbatim. No merging, no deduplication:
    /// running the same batch twice accumulates two blocks.
    pub fn prepend(&mut self, entry: &ChangelogEntry) {
        let block = entry.render();

        let mut new_content = String::with_capacity(block.len() + self.content.len());
        new_content.push_str(&block);
        new_content.push_str(&self.content);

        self.content = new_content;
    }

    /// # Errors
    ///
    /// Returns [`ChangelogError::Write`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Prepends `entry` to every changes file in `files`.
///
/// # Errors
///
/// Returns [`ChangelogError::Read`] or [`ChangelogError::Write`] on IO
/// failure; files already rewritten stay rewritten.
pub fn prepend_to_files(files: &[PathBuf], entry: &ChangelogEntry) -> Result<(), ChangelogError> {
    for path in files {
        let mut changelog = Changelog::from_file(path)?;
        changelog.prepend(entry);
        changelog.write_to_file(path)?;
    }

    Ok(())
}
