mod commit;
mod diff;
mod status;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

/// One repository checkout, opened for the duration of its turn in the
/// batch.
pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the checkout is not inside
    /// a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@example.com")?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        let repository = Repository::open(dir.path())?;
        Ok((dir, repository))
    }

    #[test]
    fn open_resolves_the_checkout_root() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        let expected = dir.path().canonicalize()?;
        let actual = repo.root().canonicalize()?;
        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn open_outside_any_repository_fails() {
        let dir = TempDir::new().expect("failed to create temp dir");

        let result = Repository::open(dir.path());

        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }
}
