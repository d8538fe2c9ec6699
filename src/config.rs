//! Configuration loading from TOML.
//!
//! ```toml
//! server_ip_port = "127.0.0.1:4000"
//! timeout_secs = 30
//!
//! [log]
//! level = "info"
//! console = true
//! file = "log/ocean.log"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::logging::LogConfig;
use crate::network::DEFAULT_API_URL;

/// Error type for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    /// Full base URL. Wins over `server_ip_port` when both are set.
    pub base_url: Option<String>,
    /// `host:port` of the service; expands to `http://host:port`.
    pub server_ip_port: Option<String>,
    /// Per-request timeout.
    pub timeout_secs: u64,
    pub log: LogConfig,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            server_ip_port: None,
            timeout_secs: 30,
            log: LogConfig::default(),
        }
    }
}

impl OceanConfig {
    /// The base URL requests are sent to.
    pub fn api_url(&self) -> String {
        if let Some(url) = self.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return url.trim_end_matches('/').to_string();
        }
        if let Some(ipport) = self
            .server_ip_port
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return format!("http://{}", ipport);
        }
        DEFAULT_API_URL.to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Collect every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let api_url = self.api_url();
        match url::Url::parse(&api_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                if parsed.host_str().is_none() {
                    errors.push(format!("base URL '{}' has no host", api_url));
                }
            }
            Ok(parsed) => errors.push(format!(
                "base URL '{}' must use http or https, not '{}'",
                api_url,
                parsed.scheme()
            )),
            Err(e) => errors.push(format!("base URL '{}' is invalid: {}", api_url, e)),
        }

        if self.timeout_secs == 0 {
            errors.push("timeout_secs must be greater than 0".to_string());
        }

        if let Some(file) = &self.log.file {
            if file.file_name().is_none() {
                errors.push(format!("log file '{}' has no file name", file.display()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<OceanConfig, ConfigError> {
    let config: OceanConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<OceanConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
