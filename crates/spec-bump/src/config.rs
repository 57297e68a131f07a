use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use bump_core::Author;

/// Name of the optional per-checkouts-directory config file.
pub(crate) const CONFIG_FILE: &str = "spec-bump.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Batch-level settings that are awkward on the command line: the
/// changelog attribution, repositories to leave alone, and the default
/// bug number. All of it can be overridden per run by CLI flags.
///
/// ```toml
/// author = "Jane Doe <jane@example.com>"
/// bug = "1198109"
/// exclude = ["yast-rake", "skelcd-control-suse-manager-proxy"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BumpConfig {
    pub author: Option<Author>,
    pub bug: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl BumpConfig {
    /// Loads the config file, or the defaults when it does not exist.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}
