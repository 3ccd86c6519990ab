//! Credentials source registry for creating sources by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::env_source::EnvCredentialSource;
use super::file_source::FileCredentialSource;
use super::memory_source::MemoryCredentialSource;
use super::traits::CredentialSource;

/// Factory function type for creating credentials sources
pub type SourceFactory = Box<dyn Fn() -> Arc<dyn CredentialSource> + Send + Sync>;

struct SourceDefinition {
    description: String,
    factory: SourceFactory,
}

static REGISTRY: Lazy<RwLock<HashMap<String, SourceDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "env".to_string(),
        SourceDefinition {
            description: "Read Auth0 settings from environment variables".to_string(),
            factory: Box::new(|| Arc::new(EnvCredentialSource::new())),
        },
    );

    map.insert(
        "file".to_string(),
        SourceDefinition {
            description: "Read Auth0 settings from the user credentials file".to_string(),
            factory: Box::new(|| Arc::new(FileCredentialSource::user())),
        },
    );

    map.insert(
        "memory".to_string(),
        SourceDefinition {
            description: "Empty in-memory source (testing)".to_string(),
            factory: Box::new(|| Arc::new(MemoryCredentialSource::new())),
        },
    );

    RwLock::new(map)
});

/// Register a credentials source under `name`, replacing any existing one
///
/// # Example
///
/// ```
/// use envcfg_core::credentials::{register_credential_source, MemoryCredentialSource};
/// use std::sync::Arc;
///
/// register_credential_source(
///     "fixture",
///     "Fixed test credentials",
///     Box::new(|| Arc::new(MemoryCredentialSource::from_pairs([("url", "tenant")]))),
/// );
/// ```
pub fn register_credential_source(name: &str, description: &str, factory: SourceFactory) {
    if let Ok(mut registry) = REGISTRY.write() {
        registry.insert(
            name.to_string(),
            SourceDefinition {
                description: description.to_string(),
                factory,
            },
        );
    }
}

/// Create a credentials source by name
///
/// ```
/// use envcfg_core::credentials::{create_credential_source, CredentialSource};
///
/// let source = create_credential_source("env").expect("env source should exist");
/// assert_eq!(source.name(), "env");
/// ```
pub fn create_credential_source(name: &str) -> Option<Arc<dyn CredentialSource>> {
    let registry = REGISTRY.read().ok()?;
    registry.get(name).map(|def| (def.factory)())
}

/// All registered sources as `(name, description)`, sorted by name
pub fn list_credential_sources() -> Vec<(String, String)> {
    let Ok(registry) = REGISTRY.read() else {
        return Vec::new();
    };
    let mut sources: Vec<_> = registry
        .iter()
        .map(|(name, def)| (name.clone(), def.description.clone()))
        .collect();
    sources.sort();
    sources
}

pub fn has_credential_source(name: &str) -> bool {
    REGISTRY.read().map(|r| r.contains_key(name)).unwrap_or(false)
}

/// Remove a registered source (mainly for testing)
pub fn unregister_credential_source(name: &str) -> bool {
    REGISTRY
        .write()
        .map(|mut r| r.remove(name).is_some())
        .unwrap_or(false)
}
