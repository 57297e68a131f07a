pub mod author;
pub mod error;
pub mod policy;
pub mod types;

pub use author::Author;
pub use error::PolicyError;
pub use policy::VersionPolicy;
pub use types::Classification;

pub type Result<T> = std::result::Result<T, PolicyError>;
