//! Default values for every configuration section.

use crate::schema::*;
use drawpad_common::{Color, LoggingConfig, Tool};

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            pad: PadConfig::default(),
            gallery: GalleryConfig::default(),
            ranking: RankingConfig::default(),
            logging: LoggingConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::Pen,
            default_color: Color::black(),
            default_size: 8,
            min_size: 1,
            max_size: 64,
            pen_mode: true,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            like_cooldown_seconds: 3,
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "MuscleCat Drawing".to_string(),
            short_name: "근육고양이 그림판".to_string(),
            description: "간단하게 그림을 그리는 앱이다!".to_string(),
            theme_color: Color::white(),
            background_color: Color::white(),
            display: DisplayMode::Standalone,
            scope: "/".to_string(),
            start_url: "/".to_string(),
            icons: vec![
                IconConfig {
                    src: "pwa-192x192.png".to_string(),
                    sizes: "192x192".to_string(),
                    mime_type: "image/png".to_string(),
                },
                IconConfig {
                    src: "pwa-512x512.png".to_string(),
                    sizes: "512x512".to_string(),
                    mime_type: "image/png".to_string(),
                },
            ],
            register_type: RegisterType::AutoUpdate,
            include_assets: vec!["favicon.svg".to_string(), "robots.txt".to_string()],
        }
    }
}
