//! In-memory configuration provider

use std::sync::Arc;

use super::error::ConfigResult;
use super::traits::ConfigProvider;
use crate::types::EnvironmentConfig;

/// Provider around an already-built configuration
///
/// Useful for tests of consuming code and for hosts that build the value
/// themselves (e.g. from an [`EnvironmentFile`](super::EnvironmentFile)).
#[derive(Debug, Clone)]
pub struct MemoryConfigProvider {
    config: Arc<EnvironmentConfig>,
}

impl MemoryConfigProvider {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn from_shared(config: Arc<EnvironmentConfig>) -> Self {
        Self { config }
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn environment(&self) -> ConfigResult<Arc<EnvironmentConfig>> {
        Ok(Arc::clone(&self.config))
    }
}
