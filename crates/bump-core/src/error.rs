use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid target version '{version}': expected a dotted numeric version")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("target versions '{target}' and '{alternate}' belong to the same major family")]
    SameMajorFamily { target: String, alternate: String },

    #[error("invalid author '{value}': expected 'Name <email>'")]
    InvalidAuthor { value: String },
}
