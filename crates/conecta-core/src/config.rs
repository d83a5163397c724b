//! Configuration management for the Conecta client.
//!
//! Loads configuration from ${CONECTA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Conecta backend.
    pub backend_url: String,
    /// Default tracing filter (overridden by the CONECTA_LOG env var).
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: Self::DEFAULT_BACKEND_URL.to_string(),
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
    const DEFAULT_LOG_FILTER: &str = "conecta=info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the effective backend base URL.
    ///
    /// The CONECTA_BACKEND_URL env var wins over the config file. The value
    /// must be an absolute http(s) URL.
    pub fn backend_url(&self) -> Result<Url> {
        let raw = std::env::var("CONECTA_BACKEND_URL").unwrap_or_else(|_| self.backend_url.clone());
        let url = Url::parse(&raw).with_context(|| format!("Invalid backend URL: {raw}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Backend URL must be http or https: {raw}");
        }
        Ok(url)
    }

    /// Saves only the backend_url field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_backend_url(backend_url: &str) -> Result<()> {
        Self::save_backend_url_to(&paths::config_path(), backend_url)
    }

    /// Saves only the backend_url field to a specific config file path.
    pub fn save_backend_url_to(path: &Path, backend_url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["backend_url"] = value(backend_url);

        Self::write_config(path, &doc.to_string())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Template written when the config file is created for the user.
fn default_config_template() -> &'static str {
    "\
# Conecta client configuration.

# Base URL of the Conecta backend.
backend_url = \"http://localhost:3000\"

# Default tracing filter. The CONECTA_LOG env var takes precedence.
log_filter = \"conecta=info\"
"
}

pub mod paths {
    //! Path resolution for Conecta configuration and data directories.
    //!
    //! CONECTA_HOME resolution order:
    //! 1. CONECTA_HOME environment variable (if set)
    //! 2. ~/.config/conecta (default)

    use std::path::PathBuf;

    /// Returns the Conecta home directory.
    ///
    /// Checks CONECTA_HOME env var first, falls back to ~/.config/conecta
    pub fn conecta_home() -> PathBuf {
        if let Ok(home) = std::env::var("CONECTA_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("conecta"))
            .expect("Could not determine home directory")
    }

    /// Returns the user's home directory from the environment.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        conecta_home().join("config.toml")
    }

    /// Returns the path to the persisted session cookie file.
    pub fn session_path() -> PathBuf {
        conecta_home().join("session.json")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        conecta_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(config.log_filter, "conecta=info");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "backend_url = \"https://conecta.example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.backend_url, "https://conecta.example.com");
        assert_eq!(config.log_filter, "conecta=info");
    }

    #[test]
    fn test_save_backend_url_creates_file_from_template() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");

        Config::save_backend_url_to(&path, "https://api.conecta.dev").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("backend_url = \"https://api.conecta.dev\""));
        // Template comments survive the edit
        assert!(contents.contains("# Conecta client configuration."));
    }

    #[test]
    fn test_save_backend_url_preserves_other_fields() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "log_filter = \"conecta=debug\"\n").unwrap();

        Config::save_backend_url_to(&path, "http://127.0.0.1:9000").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:9000");
        assert_eq!(config.log_filter, "conecta=debug");
    }

    #[test]
    fn test_backend_url_rejects_non_http() {
        let config = Config {
            backend_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.backend_url().is_err());
    }
}
