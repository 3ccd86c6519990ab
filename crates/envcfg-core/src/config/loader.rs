//! One-shot construction of the environment configuration

use super::error::ConfigResult;
use crate::credentials::CredentialSource;
use crate::logging::Logger;
use crate::types::{Credentials, EnvironmentConfig};
use crate::{log_debug, log_error, log_info};

/// Build and validate the environment configuration
///
/// Reads `url`, `audience` and `id` from `source`, combines them with the
/// built-in literals and validates every URL. Fails with
/// [`MissingCredentialsError`](super::MissingCredentialsError) when the
/// source is unavailable or any key is absent or blank, and with
/// [`ConfigError::InvalidUrl`](super::ConfigError::InvalidUrl) when a value
/// cannot be used as a URL.
///
/// # Example
///
/// ```
/// use envcfg_core::config::load_environment;
/// use envcfg_core::credentials::MemoryCredentialSource;
/// use envcfg_core::logging::NoOpLogger;
///
/// let source = MemoryCredentialSource::from_pairs([
///     ("url", "example.auth0.com"),
///     ("audience", "api123"),
///     ("id", "clientabc"),
/// ]);
/// let config = load_environment(&source, &NoOpLogger).unwrap();
/// assert_eq!(config.auth0().client_id(), "clientabc");
/// ```
pub fn load_environment(
    source: &dyn CredentialSource,
    logger: &dyn Logger,
) -> ConfigResult<EnvironmentConfig> {
    log_debug!(logger, "loading environment from '{}' credentials source", source.name());

    let credentials = Credentials::from_source(source).map_err(|e| {
        log_error!(logger, "{}", e);
        e
    })?;

    let config = EnvironmentConfig::new(credentials);
    if let Err(e) = config.validate() {
        log_error!(logger, "{}", e);
        return Err(e);
    }

    log_info!(
        logger,
        "environment loaded (production={}, api={}, auth0 domain={})",
        config.production(),
        config.api_server_url(),
        config.auth0().domain()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MissingCredentialsError};
    use crate::credentials::{FileCredentialSource, MemoryCredentialSource};
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};

    fn complete_source() -> MemoryCredentialSource {
        MemoryCredentialSource::from_pairs([
            ("url", "example.auth0.com"),
            ("audience", "api123"),
            ("id", "clientabc"),
        ])
    }

    #[test]
    fn test_load_scenario() {
        let config = load_environment(&complete_source(), &NoOpLogger).unwrap();

        let auth = serde_json::to_value(config.auth0()).unwrap();
        assert_eq!(
            auth,
            serde_json::json!({
                "url": "example.auth0.com",
                "audience": "api123",
                "clientId": "clientabc",
                "callbackURL": "http://localhost:8100"
            })
        );
        assert!(!config.production());
        assert_eq!(config.api_server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_load_missing_audience() {
        let source = complete_source();
        source.remove("audience");

        let err = load_environment(&source, &NoOpLogger).unwrap_err();
        match err {
            ConfigError::MissingCredentials(missing) => {
                assert_eq!(missing.missing_fields(), ["audience"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCredentialSource::new(dir.path().join(".cred"));

        let err = load_environment(&source, &NoOpLogger).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredentials(MissingCredentialsError::Unavailable(ref name)) if name == "file"
        ));
    }

    #[test]
    fn test_load_invalid_domain() {
        let source = complete_source();
        source.insert("url", "not a domain");

        let err = load_environment(&source, &NoOpLogger).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "auth0.url", .. }));
    }

    #[test]
    fn test_load_logs_outcome() {
        let logger = MemoryLogger::new();
        load_environment(&complete_source(), &logger).unwrap();
        assert!(logger.contains(LogLevel::Debug, "'memory' credentials source"));
        assert!(logger.contains(LogLevel::Info, "auth0 domain=example.auth0.com"));

        let logger = MemoryLogger::new();
        let _ = load_environment(&MemoryCredentialSource::new(), &logger);
        assert!(logger.contains(LogLevel::Error, "missing required fields: url, audience, id"));
    }
}
