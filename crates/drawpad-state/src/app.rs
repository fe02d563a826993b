//! Application-wide state passed to UI components.

use crate::dialog::DialogStore;
use crate::gallery::GalleryState;
use crate::pad::PadState;
use drawpad_config::{Config, ConfigCache};
use std::sync::Arc;
use tracing::info;

/// Everything the UI reads and writes, built once from configuration.
#[derive(Debug)]
pub struct AppState {
    config: Arc<ConfigCache>,
    /// Drawing pad.
    pub pad: PadState,
    /// Gallery.
    pub gallery: GalleryState,
    /// Modal dialogs.
    pub dialog: DialogStore,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: Config) -> Self {
        Self::with_cache(Arc::new(ConfigCache::new(config)))
    }

    /// Builds the state around a shared configuration handle.
    pub fn with_cache(config: Arc<ConfigCache>) -> Self {
        let snapshot = config.snapshot();
        info!(
            zone = %snapshot.ranking.timezone,
            page_size = snapshot.gallery.page_size,
            "initialising application state"
        );

        Self {
            pad: PadState::from_config(&snapshot.pad),
            gallery: GalleryState::new(Arc::clone(&config)),
            dialog: DialogStore::new(),
            config,
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<Config> {
        self.config.snapshot()
    }

    /// Shared configuration handle.
    pub const fn config_cache(&self) -> &Arc<ConfigCache> {
        &self.config
    }

    /// Asks for confirmation, then likes `name` if the user accepts.
    /// Returns the new like count, or `None` when declined.
    pub async fn confirm_like(&self, name: &str) -> drawpad_common::Result<Option<u64>> {
        if !self.dialog.show_confirm(format!("Like '{name}'?")).await {
            return Ok(None);
        }
        self.gallery.like(name).map(Some)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
