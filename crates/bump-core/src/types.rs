use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal outcome of classifying one repository's version state.
///
/// Only `Eligible` leads to a rewrite; the other three are deliberate
/// no-ops, reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "state")]
pub enum Classification {
    /// Every version already carries the target or alternate version.
    AlreadyCurrent,
    /// At least one version has no dotted structure (e.g. a date-based
    /// version like "20230901"); never touched.
    NonSemantic,
    /// Versions exist but do not fit the recognized major-version
    /// families, or mix both families within one repository.
    UnexpectedScheme,
    /// All versions agree on one recognized family; write `new_version`.
    Eligible { new_version: String },
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCurrent => write!(f, "already current"),
            Self::NonSemantic => write!(f, "non-semantic version, not touched"),
            Self::UnexpectedScheme => write!(f, "unexpected versioning scheme, not touched"),
            Self::Eligible { new_version } => write!(f, "eligible for {new_version}"),
        }
    }
}

impl Classification {
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }
}
