//! Credentials sources for the identity-provider settings
//!
//! A source answers `get("url")`, `get("audience")` and `get("id")`. Sources
//! are read-only from the loader's point of view.

mod traits;
mod env_source;
mod memory_source;
mod file_source;
mod chain_source;
mod registry;

pub use traits::{CredentialSource, SourceInfo, CredentialSourceError, CredentialSourceResult};
pub use env_source::EnvCredentialSource;
pub use memory_source::MemoryCredentialSource;
pub use file_source::{FileCredentialSource, CredentialFormat};
pub use chain_source::ChainCredentialSource;
pub use registry::{
    register_credential_source, create_credential_source, list_credential_sources,
    has_credential_source, unregister_credential_source, SourceFactory,
};
