use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Patch text of everything that differs between HEAD and the
    /// worktree, untracked files included. Shown to the operator before a
    /// confirmed commit.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NonUtf8Diff`] if the diff contains invalid
    /// UTF-8, or an error if the diff cannot be computed.
    pub fn workdir_diff(&self) -> Result<String> {
        let head_tree = self.inner.head().ok().and_then(|h| h.peel_to_tree().ok());

        let mut opts = git2::DiffOptions::new();
        opts.include_untracked(true);
        opts.show_untracked_content(true);

        let diff = self
            .inner
            .diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut opts))?;

        let mut text = String::new();
        let mut utf8_ok = true;

        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                text.push(line.origin());
            }
            match std::str::from_utf8(line.content()) {
                Ok(content) => text.push_str(content),
                Err(_) => utf8_ok = false,
            }
            true
        })?;

        if utf8_ok { Ok(text) } else { Err(GitError::NonUtf8Diff) }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::super::tests::setup_test_repo;

    #[test]
    fn clean_repo_has_empty_diff() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert!(repo.workdir_diff()?.is_empty());

        Ok(())
    }

    #[test]
    fn modified_file_shows_in_diff() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        fs::write(dir.path().join("pkg.spec"), "Version: 4.5.2\n")?;
        repo.commit_all("Add spec")?;

        fs::write(dir.path().join("pkg.spec"), "Version: 4.6.0\n")?;

        let diff = repo.workdir_diff()?;
        assert!(diff.contains("-Version: 4.5.2"));
        assert!(diff.contains("+Version: 4.6.0"));

        Ok(())
    }
}
