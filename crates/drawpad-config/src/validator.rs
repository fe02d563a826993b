//! Runtime validation of loaded configuration.

use crate::schema::{Config, IconConfig, ManifestConfig, PadConfig};
use drawpad_common::{DrawpadError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    ///
    /// Colours and the ranking timezone are checked when deserialized, so
    /// only cross-field constraints are checked here. Backend keys may be
    /// empty for offline use.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_pad(&config.pad)?;

        if config.gallery.page_size == 0 {
            return Err(DrawpadError::validation_field(
                "page size must be at least 1",
                "gallery.page_size",
            ));
        }

        if config.logging.level.trim().is_empty() {
            return Err(DrawpadError::validation_field(
                "log level cannot be empty",
                "logging.level",
            ));
        }

        Self::validate_manifest(&config.manifest)
    }

    fn validate_pad(pad: &PadConfig) -> Result<()> {
        if pad.min_size == 0 {
            return Err(DrawpadError::validation_field(
                "minimum brush size must be at least 1",
                "pad.min_size",
            ));
        }
        if pad.min_size > pad.max_size {
            return Err(DrawpadError::validation_field(
                format!(
                    "minimum brush size {} exceeds maximum {}",
                    pad.min_size, pad.max_size
                ),
                "pad.min_size",
            ));
        }
        if !(pad.min_size..=pad.max_size).contains(&pad.default_size) {
            return Err(DrawpadError::validation_field(
                format!(
                    "default brush size {} is outside {}..={}",
                    pad.default_size, pad.min_size, pad.max_size
                ),
                "pad.default_size",
            ));
        }
        Ok(())
    }

    fn validate_manifest(manifest: &ManifestConfig) -> Result<()> {
        for (value, field) in [
            (&manifest.name, "manifest.name"),
            (&manifest.short_name, "manifest.short_name"),
            (&manifest.start_url, "manifest.start_url"),
            (&manifest.scope, "manifest.scope"),
        ] {
            if value.trim().is_empty() {
                return Err(DrawpadError::validation_field(
                    format!("{field} cannot be empty"),
                    field,
                ));
            }
        }

        if !manifest.start_url.starts_with(&manifest.scope) {
            return Err(DrawpadError::validation_field(
                format!(
                    "start URL '{}' is outside scope '{}'",
                    manifest.start_url, manifest.scope
                ),
                "manifest.start_url",
            ));
        }

        if manifest.icons.is_empty() {
            return Err(DrawpadError::validation_field(
                "at least one icon is required",
                "manifest.icons",
            ));
        }

        manifest.icons.iter().try_for_each(Self::validate_icon)
    }

    fn validate_icon(icon: &IconConfig) -> Result<()> {
        if icon.src.trim().is_empty() {
            return Err(DrawpadError::validation_field(
                "icon src cannot be empty",
                "manifest.icons.src",
            ));
        }
        let valid_sizes = !icon.sizes.trim().is_empty()
            && icon.sizes.split_whitespace().all(|size| {
                size.eq_ignore_ascii_case("any")
                    || size
                        .split_once(['x', 'X'])
                        .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok())
            });
        if !valid_sizes {
            return Err(DrawpadError::validation_field(
                format!("icon '{}' has invalid sizes '{}'", icon.src, icon.sizes),
                "manifest.icons.sizes",
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
