use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// One repository checkout under the checkouts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Checkout {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the checkouts to process: every non-hidden subdirectory of
/// `dir`, sorted by name, or just the one named by `only`.
///
/// Cloning is someone else's job; a name passed with `--repo` that has no
/// checkout on disk is an error.
pub(crate) fn discover(dir: &Path, only: Option<&str>) -> Result<Vec<Checkout>> {
    if let Some(name) = only {
        let path = dir.join(name);
        if !path.is_dir() {
            return Err(CliError::RepoNotFound {
                name: name.to_string(),
                dir: dir.to_path_buf(),
            });
        }
        return Ok(vec![Checkout {
            name: name.to_string(),
            path,
        }]);
    }

    let entries = std::fs::read_dir(dir).map_err(|source| CliError::Checkouts {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut checkouts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CliError::Checkouts {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        checkouts.push(Checkout { name, path });
    }

    checkouts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(checkouts)
}
