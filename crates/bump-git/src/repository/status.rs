use crate::Result;

use super::Repository;

impl Repository {
    /// Whether the checkout has no uncommitted or untracked changes.
    ///
    /// A bump must land in its own commit, so a dirty checkout is skipped
    /// before anything is rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the git status operation fails.
    pub fn is_working_tree_clean(&self) -> Result<bool> {
        let statuses = self.inner.statuses(Some(
            git2::StatusOptions::new()
                .include_untracked(true)
                .recurse_untracked_dirs(true),
        ))?;

        Ok(statuses.is_empty())
    }
}
