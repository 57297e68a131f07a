use crate::{CommitInfo, Result};

use super::Repository;

impl Repository {
    /// Stages every change in the worktree and commits it on HEAD, the
    /// equivalent of `git commit -a` with untracked files included.
    ///
    /// # Errors
    ///
    /// Returns an error if staging fails or the commit cannot be created.
    pub fn commit_all(&self, message: &str) -> Result<CommitInfo> {
        let mut index = self.inner.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.inner.find_tree(tree_id)?;
        let sig = self.inner.signature()?;

        let parent = self.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let commit_oid = self
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        Ok(CommitInfo {
            sha: commit_oid.to_string(),
            message: message.to_string(),
        })
    }
}
