//! Credentials file source (JSON or YAML)
//!
//! The file is a flat object of string values:
//!
//! ```json
//! { "url": "tenant.auth0.com", "audience": "coffee", "id": "aBcD1234" }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::traits::{CredentialSource, CredentialSourceError, CredentialSourceResult};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::{log_debug, log_warn};

/// On-disk format of a credentials file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFormat {
    Json,
    Yaml,
}

impl CredentialFormat {
    /// Pick the format from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase()) {
            Some(ext) if ext == "yaml" || ext == "yml" => CredentialFormat::Yaml,
            _ => CredentialFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialFormat::Json => "json",
            CredentialFormat::Yaml => "yaml",
        }
    }

    fn parse(&self, content: &str) -> CredentialSourceResult<HashMap<String, String>> {
        match self {
            CredentialFormat::Json => serde_json::from_str(content)
                .map_err(|e| CredentialSourceError::Parse(format!("invalid JSON: {}", e))),
            CredentialFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| CredentialSourceError::Parse(format!("invalid YAML: {}", e))),
        }
    }
}

/// Credentials source backed by a file
///
/// The file is read on first use and cached. A missing or unparseable file
/// makes the source unavailable; parse failures are logged as warnings.
///
/// # Example
///
/// ```no_run
/// use envcfg_core::credentials::{CredentialSource, FileCredentialSource};
///
/// let source = FileCredentialSource::new("src/environments/.cred");
/// let audience = source.get("audience");
/// ```
pub struct FileCredentialSource {
    path: PathBuf,
    format: CredentialFormat,
    logger: SharedLogger,
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl FileCredentialSource {
    /// Format is inferred from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = CredentialFormat::from_path(&path);
        Self::with_format(path, format)
    }

    pub fn with_format(path: impl Into<PathBuf>, format: CredentialFormat) -> Self {
        Self {
            path: path.into(),
            format,
            logger: Arc::new(NoOpLogger),
            cache: RwLock::new(None),
        }
    }

    /// User-level credentials file (`~/.config/envcfg/credentials.json` on Linux)
    pub fn user() -> Self {
        Self::new(Self::user_path())
    }

    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("envcfg").join("credentials.json")
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CredentialFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file, bypassing the cache
    pub fn load(&self) -> CredentialSourceResult<HashMap<String, String>> {
        if !self.exists() {
            return Err(CredentialSourceError::NotAvailable(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        self.format.parse(&content)
    }

    /// Re-read the file and replace the cache
    pub fn reload(&self) -> CredentialSourceResult<()> {
        let values = self.load()?;
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(values);
        }
        Ok(())
    }

    /// Cached values, loading on first use; failures are not cached
    fn values(&self) -> Option<HashMap<String, String>> {
        if let Ok(cache) = self.cache.read() {
            if let Some(values) = cache.as_ref() {
                return Some(values.clone());
            }
        }

        match self.load() {
            Ok(values) => {
                log_debug!(self.logger, "loaded {} credential keys from {}", values.len(), self.path.display());
                if let Ok(mut cache) = self.cache.write() {
                    *cache = Some(values.clone());
                }
                Some(values)
            }
            Err(CredentialSourceError::NotAvailable(path)) => {
                log_debug!(self.logger, "credentials file not found: {}", path);
                None
            }
            Err(e) => {
                log_warn!(self.logger, "ignoring credentials file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl fmt::Debug for FileCredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileCredentialSource")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("exists", &self.exists())
            .finish()
    }
}

impl CredentialSource for FileCredentialSource {
    fn name(&self) -> &str {
        "file"
    }

    fn is_available(&self) -> bool {
        self.values().is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values()?.get(key).cloned()
    }
}
