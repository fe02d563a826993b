//! Configuration schema definitions using serde.

use drawpad_common::{Color, LoggingConfig, RankingZone, Tool};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Drawpad.
///
/// Every section falls back to its defaults when omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cloud project settings for the gallery backend.
    pub backend: BackendConfig,
    /// Drawing pad defaults.
    pub pad: PadConfig,
    /// Gallery paging and likes.
    pub gallery: GalleryConfig,
    /// Monthly-best ranking.
    pub ranking: RankingConfig,
    /// Logging.
    pub logging: LoggingConfig,
    /// Progressive web app manifest.
    pub manifest: ManifestConfig,
}

/// Cloud project settings. Values are only carried, never used to connect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Web API key.
    pub api_key: String,
    /// Authentication domain.
    pub auth_domain: String,
    /// Project identifier.
    pub project_id: String,
    /// Image storage bucket.
    pub storage_bucket: String,
    /// Messaging sender identifier.
    pub messaging_sender_id: String,
    /// Application identifier.
    pub app_id: String,
}

impl BackendConfig {
    /// True once a project id and API key are both set.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.api_key.is_empty()
    }
}

/// Starting state of the drawing pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Tool selected on start.
    pub default_tool: Tool,
    /// Brush colour on start.
    pub default_color: Color,
    /// Brush size on start.
    pub default_size: u32,
    /// Smallest selectable brush size.
    pub min_size: u32,
    /// Largest selectable brush size.
    pub max_size: u32,
    /// Whether stylus-only pen mode is on at start.
    pub pen_mode: bool,
}

/// Gallery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Drawings fetched per page.
    pub page_size: usize,
    /// Seconds before the same drawing can be liked again.
    pub like_cooldown_seconds: u64,
}

/// Ranking settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Timezone in which drawings are bucketed into months:
    /// `local`, `utc`, or an IANA name.
    pub timezone: RankingZone,
}

/// When the service worker picks up a new build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterType {
    /// Reload automatically.
    #[default]
    AutoUpdate,
    /// Ask the user first.
    Prompt,
}

/// How the installed app is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// No browser chrome, no system UI.
    Fullscreen,
    /// Looks like a native app.
    #[default]
    Standalone,
    /// Minimal navigation controls.
    MinimalUi,
    /// Regular browser tab.
    Browser,
}

/// Manifest icon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Path relative to the scope.
    pub src: String,
    /// `WxH`, space separated when several.
    pub sizes: String,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Progressive web app settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Full application name.
    pub name: String,
    /// Name under the home-screen icon.
    pub short_name: String,
    /// Description shown by install prompts.
    pub description: String,
    /// Toolbar colour.
    pub theme_color: Color,
    /// Splash screen colour.
    pub background_color: Color,
    /// Display mode.
    pub display: DisplayMode,
    /// Navigation scope.
    pub scope: String,
    /// Start URL.
    pub start_url: String,
    /// Home-screen icons.
    pub icons: Vec<IconConfig>,
    /// Service worker update policy.
    pub register_type: RegisterType,
    /// Static assets precached next to the build output.
    pub include_assets: Vec<String>,
}
