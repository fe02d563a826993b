//! Structured logging infrastructure for Drawpad

use crate::error::{DrawpadError, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "drawpad_ranking=trace")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output; stderr otherwise
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl LoggingConfig {
    /// Same output, raised to debug level with span events.
    #[must_use]
    pub fn verbose(self) -> Self {
        Self {
            level: "debug".to_string(),
            include_spans: true,
            ..self
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            DrawpadError::config_with_source(format!("invalid log level '{}'", config.level), e)
        })?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let file = config
        .file_path
        .as_ref()
        .map(|path| OpenOptions::new().create(true).append(true).open(path))
        .transpose()?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer()
        .with_span_events(span_events)
        .with_target(config.include_targets);

    let installed = match (config.format, file) {
        (LogFormat::Pretty, Some(file)) => registry
            .with(layer.pretty().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        (LogFormat::Pretty, None) => registry
            .with(layer.pretty().with_writer(std::io::stderr))
            .try_init(),
        (LogFormat::Compact, Some(file)) => registry
            .with(layer.compact().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init(),
        (LogFormat::Compact, None) => registry
            .with(layer.compact().with_writer(std::io::stderr))
            .try_init(),
        (LogFormat::Json, Some(file)) => registry
            .with(layer.json().with_writer(Mutex::new(file)))
            .try_init(),
        (LogFormat::Json, None) => registry
            .with(layer.json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| DrawpadError::with_source("failed to install tracing subscriber", e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_verbose_keeps_output_settings() {
        let config = LoggingConfig {
            format: LogFormat::Json,
            file_path: Some(PathBuf::from("drawpad.log")),
            ..LoggingConfig::default()
        }
        .verbose();
        assert_eq!(config.level, "debug");
        assert!(config.include_spans);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_path, Some(PathBuf::from("drawpad.log")));
    }

    #[test]
    fn test_config_deserializes_partial_yaml() {
        let config: LoggingConfig = serde_yaml::from_str("level: debug\nformat: json\n").unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_targets);
    }
}
