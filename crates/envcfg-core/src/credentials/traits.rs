//! Core traits and types for credentials sources

use thiserror::Error;

/// Where a credential value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// Whether the key was found
    pub available: bool,
    /// Which source provided the key (useful for chain sources)
    pub source: String,
}

impl SourceInfo {
    pub fn new(available: bool, source: impl Into<String>) -> Self {
        Self {
            available,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            available: false,
            source: "none".to_string(),
        }
    }
}

/// Errors from operations that touch a source's backing storage directly
#[derive(Error, Debug)]
pub enum CredentialSourceError {
    #[error("Source not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse credentials: {0}")]
    Parse(String),
}

pub type CredentialSourceResult<T> = Result<T, CredentialSourceError>;

/// Supplier of identity-provider identifiers
///
/// Implementations:
/// - Environment variables (`EnvCredentialSource`)
/// - In-memory (`MemoryCredentialSource`)
/// - A JSON or YAML credentials file (`FileCredentialSource`)
/// - Ordered fallback (`ChainCredentialSource`)
///
/// # Example
///
/// ```
/// use envcfg_core::credentials::{CredentialSource, MemoryCredentialSource};
///
/// let source = MemoryCredentialSource::from_pairs([("url", "tenant.auth0.com")]);
/// assert_eq!(source.get("url"), Some("tenant.auth0.com".to_string()));
/// assert!(!source.has("audience"));
/// ```
pub trait CredentialSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Whether this source can answer at all
    ///
    /// A file source whose file is missing is unavailable; an empty memory
    /// source is available but has no keys.
    fn is_available(&self) -> bool {
        true
    }

    /// Look up a value by key (`url`, `audience`, `id`)
    fn get(&self, key: &str) -> Option<String>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_info(&self, key: &str) -> SourceInfo {
        if self.has(key) {
            SourceInfo::new(true, self.name())
        } else {
            SourceInfo::not_found()
        }
    }
}
