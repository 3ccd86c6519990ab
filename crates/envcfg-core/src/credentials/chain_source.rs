//! Chained credentials source with fallback behavior

use std::fmt;
use std::sync::Arc;

use super::traits::{CredentialSource, SourceInfo};

/// Tries each source in order and returns the first value found
///
/// Unavailable sources are skipped. Keys can come from different sources,
/// e.g. the client id from the environment and the rest from a file.
///
/// # Example
///
/// ```
/// use envcfg_core::credentials::{
///     ChainCredentialSource, CredentialSource, EnvCredentialSource, MemoryCredentialSource,
/// };
/// use std::sync::Arc;
///
/// let overrides = Arc::new(MemoryCredentialSource::new());
/// let env = Arc::new(EnvCredentialSource::new());
///
/// // Explicit overrides first, then the environment
/// let chain = ChainCredentialSource::new(vec![overrides, env]);
/// assert_eq!(chain.name(), "chain");
/// ```
pub struct ChainCredentialSource {
    sources: Vec<Arc<dyn CredentialSource>>,
}

impl ChainCredentialSource {
    /// Panics if `sources` is empty
    pub fn new(sources: Vec<Arc<dyn CredentialSource>>) -> Self {
        if sources.is_empty() {
            panic!("ChainCredentialSource requires at least one source");
        }
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn CredentialSource>] {
        &self.sources
    }

    /// The first available source that has `key`
    pub fn find_source(&self, key: &str) -> Option<&Arc<dyn CredentialSource>> {
        self.sources
            .iter()
            .find(|source| source.is_available() && source.has(key))
    }
}

impl CredentialSource for ChainCredentialSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        self.sources.iter().any(|s| s.is_available())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.sources
            .iter()
            .filter(|source| source.is_available())
            .find_map(|source| source.get(key))
    }

    fn get_info(&self, key: &str) -> SourceInfo {
        match self.find_source(key) {
            Some(source) => SourceInfo::new(true, source.name()),
            None => SourceInfo::not_found(),
        }
    }
}

impl fmt::Debug for ChainCredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainCredentialSource")
            .field("sources", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{FileCredentialSource, MemoryCredentialSource};

    #[test]
    fn test_chain_source_fallback() {
        let first = Arc::new(MemoryCredentialSource::new());
        let second = Arc::new(MemoryCredentialSource::from_pairs([("id", "from_second")]));

        let chain = ChainCredentialSource::new(vec![first, second]);
        assert_eq!(chain.get("id"), Some("from_second".to_string()));
    }

    #[test]
    fn test_chain_source_priority() {
        let first = Arc::new(MemoryCredentialSource::from_pairs([("id", "from_first")]));
        let second = Arc::new(MemoryCredentialSource::from_pairs([("id", "from_second")]));

        let chain = ChainCredentialSource::new(vec![first, second]);
        assert_eq!(chain.get("id"), Some("from_first".to_string()));
    }

    #[test]
    fn test_chain_source_skips_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing_file = Arc::new(FileCredentialSource::new(dir.path().join("absent.json")));
        let memory = Arc::new(MemoryCredentialSource::from_pairs([("url", "tenant")]));

        let chain = ChainCredentialSource::new(vec![missing_file.clone()]);
        assert!(!chain.is_available());

        let chain = ChainCredentialSource::new(vec![missing_file, memory]);
        assert!(chain.is_available());
        assert_eq!(chain.get("url"), Some("tenant".to_string()));
    }

    #[test]
    fn test_chain_source_get_info() {
        let first = Arc::new(MemoryCredentialSource::new());
        let second = Arc::new(MemoryCredentialSource::from_pairs([("audience", "api")]));

        let chain = ChainCredentialSource::new(vec![first, second]);

        let info = chain.get_info("audience");
        assert!(info.available);
        assert_eq!(info.source, "memory");
        assert!(!chain.get_info("url").available);
        assert!(chain.find_source("url").is_none());
    }

    #[test]
    #[should_panic(expected = "requires at least one source")]
    fn test_chain_source_empty_panics() {
        ChainCredentialSource::new(vec![]);
    }
}
