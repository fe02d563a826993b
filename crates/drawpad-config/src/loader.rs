//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use drawpad_common::{DrawpadError, RankingZone, Result as DrawpadResult};
use std::env;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "DRAWPAD_CONFIG_PATH";

/// File names probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["drawpad.yaml", "drawpad.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[source] DrawpadError),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for DrawpadError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(inner) => inner,
            other => Self::config_with_source("configuration could not be loaded", other),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::Validation)?;

        info!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text without overrides or validation.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from `DRAWPAD_CONFIG_PATH`, then `drawpad.yaml` /
    /// `drawpad.yml` in the working directory, falling back to defaults.
    pub fn load() -> DrawpadResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            return Ok(Self::load_config(config_path)?);
        }
        if let Some(found) = DEFAULT_CONFIG_FILES
            .iter()
            .find(|name| Path::new(name).exists())
        {
            return Ok(Self::load_config(found)?);
        }

        debug!("no configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DrawpadResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Save configuration as YAML, replacing `path` atomically.
    pub fn save<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(config)?;
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(yaml.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| ConfigError::Io(e.error))?;

        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Apply environment variable overrides from the process environment
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    pub fn apply_overrides(
        config: &mut Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let backend = &mut config.backend;
        for (var, slot) in [
            ("DRAWPAD_BACKEND_API_KEY", &mut backend.api_key),
            ("DRAWPAD_BACKEND_AUTH_DOMAIN", &mut backend.auth_domain),
            ("DRAWPAD_BACKEND_PROJECT_ID", &mut backend.project_id),
            ("DRAWPAD_BACKEND_STORAGE_BUCKET", &mut backend.storage_bucket),
            (
                "DRAWPAD_BACKEND_MESSAGING_SENDER_ID",
                &mut backend.messaging_sender_id,
            ),
            ("DRAWPAD_BACKEND_APP_ID", &mut backend.app_id),
        ] {
            if let Some(value) = lookup(var) {
                *slot = value;
            }
        }

        if let Some(zone) = lookup("DRAWPAD_RANKING_TIMEZONE") {
            config.ranking.timezone = parse_var::<RankingZone>("DRAWPAD_RANKING_TIMEZONE", &zone)?;
        }

        if let Some(size) = lookup("DRAWPAD_GALLERY_PAGE_SIZE") {
            config.gallery.page_size = parse_var("DRAWPAD_GALLERY_PAGE_SIZE", &size)?;
        }

        if let Some(seconds) = lookup("DRAWPAD_LIKE_COOLDOWN_SECONDS") {
            config.gallery.like_cooldown_seconds =
                parse_var("DRAWPAD_LIKE_COOLDOWN_SECONDS", &seconds)?;
        }

        if let Some(level) = lookup("DRAWPAD_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("DRAWPAD_LOG_FILE") {
            config.logging.file_path = Some(file.into());
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
