use std::path::{Path, PathBuf};

use tracing::debug;

use bump_core::{Classification, VersionPolicy};

use crate::discovery::spec_files;
use crate::error::ScanError;

/// Result of one read-only pass over a repository checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoScan {
    pub spec_files: Vec<PathBuf>,
    pub versions: Vec<String>,
    pub classification: Classification,
}

/// Reads every metadata file under `dir` and classifies the repository
/// against `policy`. Never mutates anything.
///
/// # Errors
///
/// Returns [`ScanError::NoMetadataFiles`] if the checkout has no
/// `package/*.spec` file, [`ScanError::MissingVersionField`] if one of them
/// has no parseable `Version:` line, and [`ScanError::Read`] on IO failure.
pub fn scan_repository(dir: &Path, policy: &VersionPolicy) -> Result<RepoScan, ScanError> {
    let files = spec_files(dir);
    if files.is_empty() {
        return Err(ScanError::NoMetadataFiles {
            dir: dir.to_path_buf(),
        });
    }

    let versions = read_versions(&files)?;
    let classification = classify(&versions, policy);

    debug!(dir = %dir.display(), versions = ?versions, %classification, "scanned repository");

    Ok(RepoScan {
        spec_files: files,
        versions,
        classification,
    })
}

/// Extracts the version declared by each metadata file: the value of the
/// first line matching `Version:<whitespace><single token>`.
///
/// # Errors
///
/// Returns [`ScanError::MissingVersionField`] if a file has no such line.
pub fn read_versions(files: &[PathBuf]) -> Result<Vec<String>, ScanError> {
    files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
                path: path.clone(),
                source,
            })?;

            content
                .lines()
                .find_map(version_value)
                .map(String::from)
                .ok_or_else(|| ScanError::MissingVersionField { path: path.clone() })
        })
        .collect()
}

/// Classifies a repository's set of declared versions against the policy.
///
/// The classification is all-or-nothing across the set: a repository whose
/// files disagree (mixed major families) is never rewritten.
#[must_use]
pub fn classify(versions: &[String], policy: &VersionPolicy) -> Classification {
    // Already at the requested version; a second batch run is a no-op.
    if versions.iter().all(|v| policy.is_current(v)) {
        return Classification::AlreadyCurrent;
    }

    // Date-based or otherwise undotted versions are never touched.
    if versions.iter().any(|v| !v.contains('.')) {
        return Classification::NonSemantic;
    }

    let all_recognized = versions
        .iter()
        .all(|v| policy.in_target_family(v) || policy.in_alternate_family(v));
    if !all_recognized {
        return Classification::UnexpectedScheme;
    }

    let any_target = versions.iter().any(|v| policy.in_target_family(v));
    let any_alternate = versions.iter().any(|v| policy.in_alternate_family(v));

    // One repository carrying both families at once: too odd to touch.
    if any_target && any_alternate {
        return Classification::UnexpectedScheme;
    }

    let new_version = if any_alternate {
        policy.alternate()
    } else {
        policy.target()
    };

    Classification::Eligible {
        new_version: new_version.to_string(),
    }
}

/// Replaces the value of every matching `Version:` line in each file with
/// `new_version`, preserving the leading whitespace and the whitespace
/// between the field name and the value. All other bytes stay untouched,
/// so the resulting diff contains nothing but the version change.
///
/// # Errors
///
/// Returns [`ScanError::Read`] or [`ScanError::Write`] on IO failure.
pub fn rewrite_versions(files: &[PathBuf], new_version: &str) -> Result<(), ScanError> {
    for path in files {
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.clone(),
            source,
        })?;

        let rewritten = rewrite_content(&content, new_version);

        std::fs::write(path, rewritten).map_err(|source| ScanError::Write {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Matches `^\s*Version:\s*(\S+)\s*$` and returns the captured value.
fn version_value(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("Version:")?;
    let value = rest.trim();

    if value.is_empty() || value.contains(char::is_whitespace) {
        return None;
    }

    Some(value)
}

fn rewrite_content(content: &str, new_version: &str) -> String {
    let mut result = String::with_capacity(content.len());

    for chunk in content.split_inclusive('\n') {
        let (line, terminator) = split_terminator(chunk);

        if version_value(line).is_some() {
            let after_indent = line.trim_start();
            let indent = &line[..line.len() - after_indent.len()];
            let after_field = &after_indent["Version:".len()..];
            let gap = &after_field[..after_field.len() - after_field.trim_start().len()];

            result.push_str(indent);
            result.push_str("Version:");
            result.push_str(gap);
            result.push_str(new_version);
            result.push_str(terminator);
        } else {
            result.push_str(chunk);
        }
    }

    result
}

fn split_terminator(chunk: &str) -> (&str, &str) {
    if let Some(line) = chunk.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = chunk.strip_suffix('\n') {
        (line, "\n")
    } else {
        (chunk, "")
    }
}
