use chrono::Utc;

use bump_core::Author;

/// Timestamp format used by package changes files,
/// e.g. `Wed Sep 01 12:34:56 UTC 2021`.
const STAMP_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// One UTC timestamp formatted at the start of a batch run, so every
/// repository updated in the same run carries the same entry header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStamp(String);

impl BatchStamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().format(STAMP_FORMAT).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A changes-file block announcing a version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    stamp: BatchStamp,
    author: Author,
    version: String,
    bug: String,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(stamp: BatchStamp, author: Author, version: impl Into<String>, bug: impl Into<String>) -> Self {
        Self {
            stamp,
            author,
            version: version.into(),
            bug: bug.into(),
        }
    }

    /// Renders the block exactly as it is prepended to a changes file:
    /// dashed rule, header line, empty line, bump note, trailing empty
    /// line.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "-------------------------------------------------------------------\n\
             {} - {}\n\
             \n\
             - Bump version to {} (bsc#{})\n\
             \n",
            self.stamp.as_str(),
            self.author,
            self.version,
            self.bug
        )
    }
}
