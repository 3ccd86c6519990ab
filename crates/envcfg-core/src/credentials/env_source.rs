//! Environment variable credentials source

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::CredentialSource;

const DEFAULT_PREFIX: &str = "AUTH0_";

/// Conventional variable names for each credential key
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("url", vec!["AUTH0_DOMAIN", "AUTH0_URL"]);
    m.insert("audience", vec!["AUTH0_AUDIENCE", "API_AUDIENCE"]);
    m.insert("id", vec!["AUTH0_CLIENT_ID"]);
    m
});

/// Credentials source that reads process environment variables
///
/// Lookup order for a key:
/// 1. the key itself as a variable name
/// 2. the conventional Auth0 names (`url` → `AUTH0_DOMAIN` or `AUTH0_URL`,
///    `audience` → `AUTH0_AUDIENCE` or `API_AUDIENCE`, `id` → `AUTH0_CLIENT_ID`)
/// 3. `{prefix}{KEY}`, e.g. `AUTH0_URL`
///
/// A source built with [`with_prefix`](Self::with_prefix) skips step 2.
/// Empty variables count as unset.
///
/// # Example
///
/// ```
/// use envcfg_core::credentials::{CredentialSource, EnvCredentialSource};
///
/// let source = EnvCredentialSource::new();
/// // source.get("id") checks AUTH0_CLIENT_ID
/// assert_eq!(source.name(), "env");
/// ```
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    prefix: String,
    use_aliases: bool,
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            use_aliases: true,
        }
    }

    /// Read only `{prefix}{KEY}` variables (plus the verbatim key)
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            use_aliases: false,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Conventional variable names for a credential key
    pub fn env_vars_for_key(key: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP.get(key.to_lowercase().as_str()).map(|v| v.as_slice())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }

    /// Resolve `key` against variables returned by `read`
    fn lookup(&self, key: &str, read: impl Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(value) = read(key) {
            return Some(value);
        }

        if self.use_aliases {
            if let Some(vars) = Self::env_vars_for_key(key) {
                if let Some(value) = vars.iter().find_map(|var| read(*var)) {
                    return Some(value);
                }
            }
        }

        read(&format!("{}{}", self.prefix, key.to_uppercase()))
    }
}

impl CredentialSource for EnvCredentialSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lookup(key, Self::read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_name() {
        assert_eq!(EnvCredentialSource::new().name(), "env");
        assert_eq!(EnvCredentialSource::new().prefix(), "AUTH0_");
    }

    #[test]
    fn test_env_source_prefixed() {
        env::set_var("ENVCFG_TEST_PREFIX_URL", "tenant.auth0.com");
        env::set_var("ENVCFG_TEST_PREFIX_ID", "");

        let source = EnvCredentialSource::with_prefix("ENVCFG_TEST_PREFIX_");
        assert_eq!(source.get("url"), Some("tenant.auth0.com".to_string()));
        // Empty counts as unset
        assert_eq!(source.get("id"), None);
        assert!(!source.has("audience"));

        env::remove_var("ENVCFG_TEST_PREFIX_URL");
        env::remove_var("ENVCFG_TEST_PREFIX_ID");
    }

    /// Reader over a fixed set of variables, with empty values treated as unset
    fn fake_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    #[test]
    fn test_env_source_aliases() {
        let read = fake_env(&[
            ("AUTH0_DOMAIN", "alias-tenant.us"),
            ("AUTH0_AUDIENCE", ""),
            ("API_AUDIENCE", "alias-api"),
            ("AUTH0_ID", "from-prefix"),
        ]);

        let source = EnvCredentialSource::new();
        assert_eq!(source.lookup("url", &read), Some("alias-tenant.us".to_string()));
        // Empty AUTH0_AUDIENCE falls through to API_AUDIENCE
        assert_eq!(source.lookup("audience", &read), Some("alias-api".to_string()));
        // No AUTH0_CLIENT_ID, so the prefixed name is used
        assert_eq!(source.lookup("id", &read), Some("from-prefix".to_string()));
    }

    #[test]
    fn test_env_source_prefixed_skips_aliases() {
        let read = fake_env(&[("AUTH0_DOMAIN", "alias-tenant.us"), ("APP_URL", "prefixed.eu")]);

        let prefixed = EnvCredentialSource::with_prefix("APP_");
        assert_eq!(prefixed.lookup("url", &read), Some("prefixed.eu".to_string()));
        assert_eq!(prefixed.lookup("audience", &read), None);
    }

    #[test]
    fn test_env_source_verbatim_key_wins() {
        let read = fake_env(&[("url", "verbatim.eu"), ("AUTH0_DOMAIN", "alias-tenant.us")]);

        assert_eq!(
            EnvCredentialSource::new().lookup("url", &read),
            Some("verbatim.eu".to_string())
        );
    }

    #[test]
    fn test_env_source_verbatim_key() {
        env::set_var("ENVCFG_TEST_VERBATIM", "value");

        let source = EnvCredentialSource::with_prefix("ENVCFG_UNUSED_");
        assert_eq!(source.get("ENVCFG_TEST_VERBATIM"), Some("value".to_string()));

        let info = source.get_info("ENVCFG_TEST_VERBATIM");
        assert!(info.available);
        assert_eq!(info.source, "env");

        env::remove_var("ENVCFG_TEST_VERBATIM");
    }

    #[test]
    fn test_env_vars_for_key() {
        assert_eq!(
            EnvCredentialSource::env_vars_for_key("ID"),
            Some(&["AUTH0_CLIENT_ID"][..])
        );
        assert!(EnvCredentialSource::env_vars_for_key("secret").is_none());
    }
}
