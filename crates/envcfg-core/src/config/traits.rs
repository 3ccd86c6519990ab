//! Configuration provider trait

use std::sync::Arc;

use super::error::ConfigResult;
use crate::types::EnvironmentConfig;

/// Hands the environment configuration to consumers
///
/// Consumers (an HTTP client reading `api_server_url`, an auth module
/// reading `auth0`) take `&dyn ConfigProvider` instead of reaching for a
/// global.
///
/// Implementations:
/// - `EnvironmentProvider`: loads from a credentials source on first access
/// - `MemoryConfigProvider`: wraps a ready value
pub trait ConfigProvider: Send + Sync {
    /// The configuration; repeated calls return the same `Arc`
    fn environment(&self) -> ConfigResult<Arc<EnvironmentConfig>>;
}
