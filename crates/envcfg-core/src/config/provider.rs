//! Build-once configuration provider

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::ConfigResult;
use super::loader::load_environment;
use super::traits::ConfigProvider;
use crate::credentials::CredentialSource;
use crate::logging::SharedLogger;
use crate::types::EnvironmentConfig;

/// Loads the environment from a credentials source once and shares it
///
/// Concurrent first calls build at most one value. A failed load is not
/// remembered, so a later call tries again.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use envcfg_core::config::{ConfigProvider, EnvironmentProvider};
/// use envcfg_core::credentials::MemoryCredentialSource;
/// use envcfg_core::logging::NoOpLogger;
///
/// let source = Arc::new(MemoryCredentialSource::from_pairs([
///     ("url", "example.auth0.com"),
///     ("audience", "api123"),
///     ("id", "clientabc"),
/// ]));
///
/// // Fail fast at startup, then pass `&provider` to consumers
/// let provider = EnvironmentProvider::init(source, Arc::new(NoOpLogger)).unwrap();
/// let a = provider.environment().unwrap();
/// let b = provider.environment().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct EnvironmentProvider {
    source: Arc<dyn CredentialSource>,
    logger: SharedLogger,
    cell: OnceCell<Arc<EnvironmentConfig>>,
}

impl EnvironmentProvider {
    /// Lazy provider; nothing is read until the first [`get`](Self::get)
    pub fn new(source: Arc<dyn CredentialSource>, logger: SharedLogger) -> Self {
        Self {
            source,
            logger,
            cell: OnceCell::new(),
        }
    }

    /// Load immediately and fail if the credentials are incomplete
    pub fn init(source: Arc<dyn CredentialSource>, logger: SharedLogger) -> ConfigResult<Self> {
        let provider = Self::new(source, logger);
        provider.get()?;
        Ok(provider)
    }

    /// The configuration, loading it on first call
    pub fn get(&self) -> ConfigResult<Arc<EnvironmentConfig>> {
        self.cell
            .get_or_try_init(|| {
                load_environment(self.source.as_ref(), self.logger.as_ref()).map(Arc::new)
            })
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn source(&self) -> &Arc<dyn CredentialSource> {
        &self.source
    }
}

impl ConfigProvider for EnvironmentProvider {
    fn environment(&self) -> ConfigResult<Arc<EnvironmentConfig>> {
        self.get()
    }
}

impl fmt::Debug for EnvironmentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentProvider")
            .field("source", &self.source.name())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
