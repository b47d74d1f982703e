use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UtentiError};
use crate::fetch::DEFAULT_ENDPOINT;

/// Configuration for the utenti tools
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Users endpoint to fetch on startup
    pub endpoint: String,

    /// Request timeout in seconds for the one-shot fetch
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load config from ~/.utenti/config.toml.
    ///
    /// A missing file is not an error: the defaults match the reference
    /// deployment, so the app runs with no config at all. The
    /// `UTENTI_ENDPOINT` environment variable overrides the endpoint
    /// either way.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path (used by tests)
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|err| {
                UtentiError::config(format!("invalid TOML in {:?}: {}", path, err))
            })?
        } else {
            Self::default()
        };

        if let Ok(endpoint) = env::var("UTENTI_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }

        if config.endpoint.trim().is_empty() {
            return Err(UtentiError::config("endpoint is empty"));
        }

        Ok(config)
    }

    /// Get config file path: ~/.utenti/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".utenti/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load_from(Path::new("/nonexistent/utenti-config.toml")).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:8080/users\"").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/users");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not toml").unwrap();
        file.flush().unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, UtentiError::Config { .. }));
    }
}
