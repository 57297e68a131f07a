use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// The two versions a batch run is allowed to write, plus the derived
/// prefixes used to classify what a repository currently carries.
///
/// `target` is the component version (e.g. "4.6.0"); `alternate` is the
/// distribution-level version some repositories follow instead
/// (e.g. "15.6.0"). Both are written verbatim, never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionPolicy {
    target: String,
    alternate: String,
    target_prefix: String,
    alternate_prefix: String,
    target_major: String,
    alternate_major: String,
}

impl VersionPolicy {
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidVersion`] if either version is not a
    /// well-formed dotted numeric version, or
    /// [`PolicyError::SameMajorFamily`] if both targets share a major
    /// version (the classifier could not tell the families apart).
    pub fn new(target: &str, alternate: &str) -> Result<Self, PolicyError> {
        let target_parsed = parse_version(target)?;
        let alternate_parsed = parse_version(alternate)?;

        if target_parsed.major == alternate_parsed.major {
            return Err(PolicyError::SameMajorFamily {
                target: target.to_string(),
                alternate: alternate.to_string(),
            });
        }

        Ok(Self {
            target: target.to_string(),
            alternate: alternate.to_string(),
            // "4.6.0" -> "4.6." so that "4.6.0" and "4.6.1" both count
            // as already current
            target_prefix: current_prefix(target),
            alternate_prefix: current_prefix(alternate),
            target_major: format!("{}.", target_parsed.major),
            alternate_major: format!("{}.", alternate_parsed.major),
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    /// Whether `version` already carries the target or alternate version
    /// (up to the last component, so patch-level releases still count).
    #[must_use]
    pub fn is_current(&self, version: &str) -> bool {
        version.starts_with(&self.target_prefix) || version.starts_with(&self.alternate_prefix)
    }

    /// Whether `version` belongs to the target's major-version family.
    #[must_use]
    pub fn in_target_family(&self, version: &str) -> bool {
        version.starts_with(&self.target_major)
    }

    /// Whether `version` belongs to the alternate's major-version family.
    #[must_use]
    pub fn in_alternate_family(&self, version: &str) -> bool {
        version.starts_with(&self.alternate_major)
    }
}

fn parse_version(version: &str) -> Result<Version, PolicyError> {
    Version::parse(version).map_err(|source| PolicyError::InvalidVersion {
        version: version.to_string(),
        source,
    })
}

fn current_prefix(version: &str) -> String {
    version[..version.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> VersionPolicy {
        VersionPolicy::new("4.6.0", "15.6.0").expect("valid policy")
    }

    #[test]
    fn current_matches_patch_releases() {
        let policy = policy();

        assert!(policy.is_current("4.6.0"));
        assert!(policy.is_current("4.6.1"));
        assert!(policy.is_current("15.6.0"));
        assert!(policy.is_current("15.6.3"));
    }

    #[test]
    fn current_rejects_older_minor() {
        let policy = policy();

        assert!(!policy.is_current("4.5.2"));
        assert!(!policy.is_current("15.5.3"));
    }

    #[test]
    fn family_checks_use_major_prefix() {
        let policy = policy();

        assert!(policy.in_target_family("4.5.2"));
        assert!(!policy.in_target_family("40.1.0"));
        assert!(policy.in_alternate_family("15.5.3"));
        assert!(!policy.in_alternate_family("150.0.0"));
    }

    #[test]
    fn rejects_version_without_dots() {
        let result = VersionPolicy::new("20230901", "15.6.0");

        assert!(matches!(result, Err(PolicyError::InvalidVersion { .. })));
    }

    #[test]
    fn rejects_two_component_version() {
        let result = VersionPolicy::new("4.6", "15.6.0");

        assert!(matches!(result, Err(PolicyError::InvalidVersion { .. })));
    }

    #[test]
    fn rejects_targets_in_same_family() {
        let result = VersionPolicy::new("4.6.0", "4.7.0");

        assert!(matches!(result, Err(PolicyError::SameMajorFamily { .. })));
    }
}
