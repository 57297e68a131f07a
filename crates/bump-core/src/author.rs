use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Attribution written into changelog entries, in the usual
/// `Name <email>` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidAuthor`] if the string is not of the
    /// form `Name <email>`.
    pub fn parse(value: &str) -> Result<Self, PolicyError> {
        let invalid = || PolicyError::InvalidAuthor {
            value: value.to_string(),
        };

        let (name, rest) = value.split_once('<').ok_or_else(invalid)?;
        let email = rest.strip_suffix('>').ok_or_else(invalid)?;

        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || !email.contains('@') {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl FromStr for Author {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Author {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Author> for String {
    fn from(author: Author) -> Self {
        author.to_string()
    }
}
