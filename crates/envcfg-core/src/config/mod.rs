//! Loading and providing the environment configuration
//!
//! - `load_environment`: one-shot construction from a credentials source
//! - `EnvironmentProvider`: builds once, hands out the same `Arc` afterwards
//! - `MemoryConfigProvider`: wraps an already-built value
//! - `EnvironmentFile`: writes/reads the JSON or YAML file a frontend build consumes

mod error;
mod traits;
mod loader;
mod provider;
mod memory;
mod file;

pub use error::{ConfigError, ConfigResult, MissingCredentialsError};
pub use traits::ConfigProvider;
pub use loader::load_environment;
pub use provider::EnvironmentProvider;
pub use memory::MemoryConfigProvider;
pub use file::{EnvironmentFile, EnvironmentFormat};
