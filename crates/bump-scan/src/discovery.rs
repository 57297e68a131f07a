use std::path::{Path, PathBuf};

/// Package metadata files of one repository checkout: `package/*.spec`.
#[must_use]
pub fn spec_files(dir: &Path) -> Vec<PathBuf> {
    glob_sorted(dir, "package/*.spec")
}

/// Changelog files of one repository checkout: `package/*.changes`.
#[must_use]
pub fn changes_files(dir: &Path) -> Vec<PathBuf> {
    glob_sorted(dir, "package/*.changes")
}

fn glob_sorted(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = dir.join(pattern);

    let Ok(paths) = glob::glob(&pattern.to_string_lossy()) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_spec_and_changes_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("package"))?;
        fs::write(dir.path().join("package/foo.spec"), "")?;
        fs::write(dir.path().join("package/foo.changes"), "")?;
        fs::write(dir.path().join("package/README"), "")?;

        assert_eq!(spec_files(dir.path()), vec![dir.path().join("package/foo.spec")]);
        assert_eq!(
            changes_files(dir.path()),
            vec![dir.path().join("package/foo.changes")]
        );

        Ok(())
    }

    #[test]
    fn multiple_specs_come_back_sorted() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("package"))?;
        fs::write(dir.path().join("package/b.spec"), "")?;
        fs::write(dir.path().join("package/a.spec"), "")?;

        let files = spec_files(dir.path());

        assert_eq!(
            files,
            vec![
                dir.path().join("package/a.spec"),
                dir.path().join("package/b.spec")
            ]
        );

        Ok(())
    }

    #[test]
    fn missing_package_dir_yields_nothing() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        assert!(spec_files(dir.path()).is_empty());
        assert!(changes_files(dir.path()).is_empty());

        Ok(())
    }
}
