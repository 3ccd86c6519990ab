//! Configuration errors

use thiserror::Error;

/// The credentials source could not supply the identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingCredentialsError {
    #[error("Credentials source '{0}' is not available")]
    Unavailable(String),

    #[error("Credentials source '{source_name}' is missing required fields: {}", .fields.join(", "))]
    MissingFields {
        source_name: String,
        fields: Vec<String>,
    },
}

impl MissingCredentialsError {
    /// Keys that were absent or blank (empty when the whole source was unavailable)
    pub fn missing_fields(&self) -> &[String] {
        match self {
            MissingCredentialsError::Unavailable(_) => &[],
            MissingCredentialsError::MissingFields { fields, .. } => fields,
        }
    }
}

/// Errors that can occur while loading, validating or persisting the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    MissingCredentials(#[from] MissingCredentialsError),

    #[error("Invalid URL in {field}: '{value}' ({reason})")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
