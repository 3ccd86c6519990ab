//! Typed view of the values a credentials source supplies

use serde::{Deserialize, Serialize};

use crate::credentials::CredentialSource;
use crate::config::MissingCredentialsError;

/// Key for the identity-provider domain prefix
pub const URL_KEY: &str = "url";
/// Key for the API audience
pub const AUDIENCE_KEY: &str = "audience";
/// Key for the public client id
pub const CLIENT_ID_KEY: &str = "id";

/// Every key a source must supply, in the order they are reported when missing
pub const CREDENTIAL_KEYS: [&str; 3] = [URL_KEY, AUDIENCE_KEY, CLIENT_ID_KEY];

/// Identity-provider identifiers read from a credentials source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub url: String,
    pub audience: String,
    #[serde(rename = "id")]
    pub client_id: String,
}

impl Credentials {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
        }
    }

    /// Read all required keys from `source`
    ///
    /// Blank values count as missing. Every missing key is reported, not just
    /// the first one.
    pub fn from_source(source: &dyn CredentialSource) -> Result<Self, MissingCredentialsError> {
        if !source.is_available() {
            return Err(MissingCredentialsError::Unavailable(source.name().to_string()));
        }

        let values = CREDENTIAL_KEYS.map(|key| {
            source
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        });

        let missing: Vec<String> = CREDENTIAL_KEYS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(MissingCredentialsError::MissingFields {
                source_name: source.name().to_string(),
                fields: missing,
            });
        }

        let [url, audience, client_id] = values.map(Option::unwrap_or_default);
        Ok(Self { url, audience, client_id })
    }
}
