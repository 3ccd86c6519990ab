//! envcfg Core
//!
//! Environment configuration for the frontend: a deployment flag, the API
//! server address and the Auth0 settings. The Auth0 identifiers come from a
//! credentials source; everything else is a built-in literal.
//!
//! ## Loading
//!
//! Build the configuration once at startup and hand it to consumers by
//! reference. Incomplete credentials fail immediately.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use envcfg_core::{
//!     ChainCredentialSource, ConsoleLogger, EnvCredentialSource, EnvironmentProvider, FileCredentialSource,
//! };
//!
//! let source = Arc::new(ChainCredentialSource::new(vec![
//!     Arc::new(EnvCredentialSource::new()),
//!     Arc::new(FileCredentialSource::new("src/environments/.cred")),
//! ]));
//! let provider = EnvironmentProvider::init(source, Arc::new(ConsoleLogger::new()))?;
//! let env = provider.get()?;
//! println!("login at {}", env.auth0().login_url("/tabs/user-page")?);
//! # Ok::<(), envcfg_core::ConfigError>(())
//! ```

pub mod types;
pub mod credentials;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use types::{
    EnvironmentConfig, AuthConfig, Credentials,
    API_SERVER_URL, CALLBACK_URL, PRODUCTION, SIGNING_ALGORITHMS,
};

pub use credentials::{
    CredentialSource, SourceInfo, CredentialSourceError, CredentialSourceResult,
    EnvCredentialSource, MemoryCredentialSource, FileCredentialSource, ChainCredentialSource,
    register_credential_source, create_credential_source, list_credential_sources,
};

pub use logging::{Logger, SharedLogger, LogLevel, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ConfigProvider, ConfigError, ConfigResult, MissingCredentialsError,
    EnvironmentProvider, MemoryConfigProvider, EnvironmentFile, EnvironmentFormat,
    load_environment,
};
