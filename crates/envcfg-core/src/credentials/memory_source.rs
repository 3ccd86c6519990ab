//! In-memory credentials source

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::CredentialSource;

/// In-memory credentials source for tests and embedding
///
/// Values are set through inherent methods; the [`CredentialSource`] view is
/// read-only.
///
/// # Example
///
/// ```
/// use envcfg_core::credentials::{CredentialSource, MemoryCredentialSource};
///
/// let source = MemoryCredentialSource::new();
/// source.insert("audience", "api123");
/// assert_eq!(source.get("audience"), Some("api123".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentialSource {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(initial: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Build from `(key, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_values(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.into(), value.into());
        }
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().ok().and_then(|mut values| values.remove(key))
    }

    pub fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialSource for MemoryCredentialSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok().and_then(|values| values.get(key).cloned())
    }
}

impl Clone for MemoryCredentialSource {
    fn clone(&self) -> Self {
        let values = self.values.read().map(|v| v.clone()).unwrap_or_default();
        Self::with_values(values)
    }
}
