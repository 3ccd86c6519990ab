//! Environment file (JSON or YAML)
//!
//! Writes the loaded configuration in the shape a frontend build reads
//! (`environment.json` next to the app's sources) and reads it back.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use crate::types::EnvironmentConfig;

/// Serialization format of an environment file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentFormat {
    Json,
    Yaml,
}

impl EnvironmentFormat {
    /// `.yaml`/`.yml` is YAML, anything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase()) {
            Some(ext) if ext == "yaml" || ext == "yml" => EnvironmentFormat::Yaml,
            _ => EnvironmentFormat::Json,
        }
    }

    pub fn from_name(name: &str) -> ConfigResult<Self> {
        match name.to_lowercase().as_str() {
            "json" => Ok(EnvironmentFormat::Json),
            "yaml" | "yml" => Ok(EnvironmentFormat::Yaml),
            other => Err(ConfigError::Other(format!("Unknown format: {}", other))),
        }
    }

    /// Render `config` in this format
    pub fn render(&self, config: &EnvironmentConfig) -> ConfigResult<String> {
        match self {
            EnvironmentFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            EnvironmentFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        }
    }

    pub fn parse(&self, content: &str) -> ConfigResult<EnvironmentConfig> {
        match self {
            EnvironmentFormat::Json => Ok(serde_json::from_str(content)?),
            EnvironmentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

/// An environment file on disk
///
/// # Example
///
/// ```no_run
/// use envcfg_core::config::EnvironmentFile;
///
/// let file = EnvironmentFile::new("src/environments/environment.json");
/// let config = file.read()?;
/// # Ok::<(), envcfg_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentFile {
    path: PathBuf,
    format: EnvironmentFormat,
}

impl EnvironmentFile {
    /// Format is inferred from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = EnvironmentFormat::from_path(&path);
        Self { path, format }
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, EnvironmentFormat::Json)
    }

    pub fn yaml(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, EnvironmentFormat::Yaml)
    }

    pub fn with_format(path: impl Into<PathBuf>, format: EnvironmentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> EnvironmentFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write `config`, creating parent directories as needed
    pub fn write(&self, config: &EnvironmentConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.format.render(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Read and validate the file
    pub fn read(&self) -> ConfigResult<EnvironmentConfig> {
        let content = fs::read_to_string(&self.path)?;
        let config = self.format.parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copy the current file to `<name>.backup`; `None` if there is nothing to back up
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| ConfigError::Other(format!("Not a file path: {}", self.path.display())))?;
        name.push(".backup");

        let backup_path = self.path.with_file_name(name);
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Credentials;
    use tempfile::tempdir;

    fn sample() -> EnvironmentConfig {
        EnvironmentConfig::new(Credentials::new("example.auth0.com", "api123", "clientabc"))
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(EnvironmentFormat::from_path(Path::new("env.yml")), EnvironmentFormat::Yaml);
        assert_eq!(EnvironmentFormat::from_path(Path::new("env.json")), EnvironmentFormat::Json);
        assert_eq!(EnvironmentFormat::from_name("YAML").unwrap(), EnvironmentFormat::Yaml);
        assert!(EnvironmentFormat::from_name("toml").is_err());
    }

    #[test]
    fn test_write_and_read_json() {
        let dir = tempdir().unwrap();
        let file = EnvironmentFile::new(dir.path().join("nested").join("environment.json"));

        file.write(&sample()).unwrap();
        assert!(file.exists());

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"apiServerUrl\""));
        assert!(content.contains("\"callbackURL\""));

        assert_eq!(file.read().unwrap(), sample());
    }

    #[test]
    fn test_yaml_content() {
        let dir = tempdir().unwrap();
        let file = EnvironmentFile::yaml(dir.path().join("environment"));

        file.write(&sample()).unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("clientId: clientabc"));
        assert!(content.contains("production: false"));
    }

    #[test]
    fn test_read_rejects_invalid_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("environment.json");
        fs::write(
            &path,
            r#"{"production": false, "apiServerUrl": "nowhere", "auth0": {"url": "t", "audience": "a", "clientId": "c", "callbackURL": "http://localhost:8100"}}"#,
        )
        .unwrap();

        let err = EnvironmentFile::new(&path).read().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "apiServerUrl", .. }));
    }

    #[test]
    fn test_read_missing_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("environment.json");
        fs::write(&path, r#"{"production": false, "apiServerUrl": "http://127.0.0.1:5000"}"#).unwrap();

        let err = EnvironmentFile::new(&path).read().unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let file = EnvironmentFile::new(dir.path().join("environment.json"));

        assert!(file.backup().unwrap().is_none());

        file.write(&sample()).unwrap();
        let backup_path = file.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.ends_with("environment.json.backup"));
    }
}
