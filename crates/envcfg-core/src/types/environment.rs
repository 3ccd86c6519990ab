//! The environment record handed to the rest of the application

use serde::{Deserialize, Serialize};
use url::Url;

use super::credentials::Credentials;
use crate::config::{ConfigError, ConfigResult};

/// Deployment-mode flag
pub const PRODUCTION: bool = false;

/// Base address of the backend API server
pub const API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Where the identity provider redirects after login (the running frontend)
pub const CALLBACK_URL: &str = "http://localhost:8100";

/// Algorithms the identity provider signs access tokens with
pub const SIGNING_ALGORITHMS: &[&str] = &["RS256"];

const AUTH0_HOST_SUFFIX: &str = ".auth0.com";

/// Environment-specific settings, built once at startup
///
/// There are no setters. Share it as `Arc<EnvironmentConfig>` through a
/// [`ConfigProvider`](crate::config::ConfigProvider).
///
/// Serialises with the field names the frontend reads (`apiServerUrl`,
/// `auth0.clientId`, `auth0.callbackURL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth0: AuthConfig,
}

impl EnvironmentConfig {
    /// Combine the built-in literals with credentials
    ///
    /// Does not validate; [`load_environment`](crate::config::load_environment)
    /// calls [`validate`](Self::validate) before handing the value out.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            production: PRODUCTION,
            api_server_url: API_SERVER_URL.to_string(),
            auth0: AuthConfig {
                url: credentials.url,
                audience: credentials.audience,
                client_id: credentials.client_id,
                callback_url: CALLBACK_URL.to_string(),
            },
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &AuthConfig {
        &self.auth0
    }

    /// Check that every URL-valued field is usable
    pub fn validate(&self) -> ConfigResult<()> {
        parse_http_url("apiServerUrl", &self.api_server_url)?;
        self.auth0.validate()
    }
}

/// Identity-provider (Auth0) settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    url: String,
    audience: String,
    client_id: String,
    #[serde(rename = "callbackURL")]
    callback_url: String,
}

impl AuthConfig {
    /// Domain prefix as supplied by the credentials source
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Tenant host name
    ///
    /// The prefix gets `.auth0.com` appended, so `"tenant"` becomes
    /// `"tenant.auth0.com"` and a regional `"tenant.us"` becomes
    /// `"tenant.us.auth0.com"`. A value already ending in `.auth0.com` is
    /// taken as the full host.
    pub fn domain(&self) -> String {
        let host = self
            .url
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        if host.to_lowercase().ends_with(AUTH0_HOST_SUFFIX) {
            host.to_string()
        } else {
            format!("{}{}", host, AUTH0_HOST_SUFFIX)
        }
    }

    /// Token issuer, `https://{domain}/`
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// Where the tenant publishes its signing keys
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer())
    }

    /// Implicit-flow login link that redirects to `callback_url` + `callback_path`
    pub fn login_url(&self, callback_path: &str) -> ConfigResult<String> {
        let mut url = self.tenant_url()?;
        url.set_path("authorize");
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &format!("{}{}", self.callback_url, callback_path));

        Ok(url.to_string())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        parse_http_url("auth0.callbackURL", &self.callback_url)?;
        self.tenant_url().map(|_| ())
    }

    fn tenant_url(&self) -> ConfigResult<Url> {
        let domain = self.domain();
        let invalid = |reason: String| ConfigError::InvalidUrl {
            field: "auth0.url",
            value: self.url.clone(),
            reason,
        };

        if domain.is_empty() || domain.starts_with('.') {
            return Err(invalid("empty domain".to_string()));
        }
        if let Some(c) = domain.chars().find(|c| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace()) {
            return Err(invalid(format!("unexpected character {:?} in domain", c)));
        }

        Url::parse(&format!("https://{}/", domain)).map_err(|e| invalid(e.to_string()))
    }
}

/// Parse an absolute `http`/`https` URL with a host
fn parse_http_url(field: &'static str, value: &str) -> ConfigResult<Url> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
