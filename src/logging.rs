//! Log level / sink configuration and subscriber setup.
//!
//! The library only emits `tracing` events. Applications (and the `ocean`
//! binary) call [`init_logging`] once to route them to the console, a file,
//! or both. `RUST_LOG` overrides the configured level when set.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Minimum severity that is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Where log output goes and how much of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Write to stderr.
    pub console: bool,
    /// Append to this file (parent directories are created).
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
            file: None,
        }
    }
}

#[cfg(feature = "logging")]
pub use setup::{init_logging, LogGuard, LoggingError};

#[cfg(feature = "logging")]
mod setup {
    use super::LogConfig;
    use std::path::Path;
    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

    #[derive(thiserror::Error, Debug)]
    pub enum LoggingError {
        #[error("cannot create log directory {path}: {source}")]
        CreateDir {
            path: String,
            #[source]
            source: std::io::Error,
        },

        #[error("log file path '{0}' has no file name")]
        InvalidPath(String),

        #[error("a global subscriber is already installed: {0}")]
        AlreadyInitialized(String),
    }

    /// Keeps file sinks flushing; drop it only at shutdown.
    #[must_use = "dropping the guard stops file logging"]
    pub struct LogGuard {
        _guards: Vec<WorkerGuard>,
    }

    type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

    /// Install the global subscriber described by `config`.
    pub fn init_logging(config: &LogConfig) -> Result<LogGuard, LoggingError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guards = Vec::new();

        if config.console {
            layers.push(fmt::layer().with_writer(std::io::stderr).boxed());
        }

        if let Some(path) = &config.file {
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidPath(path.display().to_string()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
                path: dir.display().to_string(),
                source,
            })?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
            guards.push(guard);
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        Ok(LogGuard { _guards: guards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" error ".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_file_path_without_name_is_rejected() {
        let config = LogConfig {
            console: false,
            file: Some(PathBuf::from("/")),
            ..LogConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::InvalidPath(_))
        ));
    }
}
