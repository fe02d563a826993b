//! Web app manifest rendering.

use crate::schema::{DisplayMode, IconConfig, ManifestConfig};
use drawpad_common::Result;
use serde::{Deserialize, Serialize};

/// The `manifest.webmanifest` document served next to the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    /// Full application name.
    pub name: String,
    /// Name under the home-screen icon.
    pub short_name: String,
    /// Description.
    pub description: String,
    /// Toolbar colour, `#rrggbb`.
    pub theme_color: String,
    /// Splash screen colour, `#rrggbb`.
    pub background_color: String,
    /// Display mode.
    pub display: DisplayMode,
    /// Navigation scope.
    pub scope: String,
    /// Start URL.
    pub start_url: String,
    /// Icons.
    pub icons: Vec<IconConfig>,
}

impl From<&ManifestConfig> for WebManifest {
    fn from(config: &ManifestConfig) -> Self {
        Self {
            name: config.name.clone(),
            short_name: config.short_name.clone(),
            description: config.description.clone(),
            theme_color: config.theme_color.to_string(),
            background_color: config.background_color.to_string(),
            display: config.display,
            scope: config.scope.clone(),
            start_url: config.start_url.clone(),
            icons: config.icons.clone(),
        }
    }
}

impl WebManifest {
    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Files the service worker precaches: the configured static assets followed
/// by the icons, without duplicates.
pub fn precache_assets(config: &ManifestConfig) -> Vec<String> {
    let mut assets: Vec<String> = Vec::with_capacity(config.include_assets.len() + config.icons.len());
    for asset in config
        .include_assets
        .iter()
        .chain(config.icons.iter().map(|icon| &icon.src))
    {
        if !assets.contains(asset) {
            assets.push(asset.clone());
        }
    }
    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_manifest_json() {
        let manifest = WebManifest::from(&ManifestConfig::default());
        let value: serde_json::Value = serde_json::from_str(&manifest.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["name"], "MuscleCat Drawing");
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["theme_color"], "#ffffff");
        assert_eq!(value["start_url"], "/");
        assert_eq!(
            value["icons"][1],
            json!({"src": "pwa-512x512.png", "sizes": "512x512", "type": "image/png"})
        );
    }

    #[test]
    fn test_display_mode_names() {
        let mut config = ManifestConfig::default();
        config.display = DisplayMode::MinimalUi;
        let value = serde_json::to_value(WebManifest::from(&config)).unwrap();
        assert_eq!(value["display"], "minimal-ui");
    }

    #[test]
    fn test_precache_assets_deduplicates() {
        let mut config = ManifestConfig::default();
        config.include_assets.push("pwa-192x192.png".to_string());
        assert_eq!(
            precache_assets(&config),
            vec![
                "favicon.svg",
                "robots.txt",
                "pwa-192x192.png",
                "pwa-512x512.png"
            ]
        );
    }
}
