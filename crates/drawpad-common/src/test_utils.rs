//! Test utilities and shared test helpers for Drawpad.
//!
//! Fixtures and helper functions used by the unit and integration tests of
//! every crate in the workspace.

use crate::types::DrawingRecord;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a mock timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Create a temporary file for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temporary file")
}

/// Drawing record fixtures.
pub mod drawing_fixtures {
    use super::*;

    /// A record dated with a plain `YYYY-MM-DD` string.
    pub fn record(name: &str, date: &str, likes: u64) -> DrawingRecord {
        DrawingRecord::new(name, date, likes)
    }

    /// Names of the records flagged as monthly best, in order.
    pub fn best_names(records: &[DrawingRecord]) -> Vec<&str> {
        records
            .iter()
            .filter(|r| r.is_monthly_best)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// A small gallery spanning two years.
    ///
    /// Winners: `dec-top` (2023-12), `jan-a` and `jan-b` tied (2024-01),
    /// nobody in 2024-02, `jan-old` (2023-01).
    pub fn sample_gallery() -> Vec<DrawingRecord> {
        vec![
            record("dec-top", "2023-12-24", 10),
            record("dec-low", "2023-12-02", 3),
            record("jan-a", "2024-01-05", 7),
            record("jan-b", "2024-01-20", 7),
            record("jan-c", "2024-01-21", 1),
            record("feb-zero", "2024-02-10", 0),
            record("feb-zero-2", "2024-02-11", 0),
            record("jan-old", "2023-01-15", 42),
        ]
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as a YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
ranking:
  timezone: "utc"
"#
    }

    /// A configuration touching every section.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "backend:\n",
            "  api_key: \"test-api-key\"\n",
            "  auth_domain: \"drawpad-test.firebaseapp.com\"\n",
            "  project_id: \"drawpad-test\"\n",
            "  storage_bucket: \"drawpad-test.appspot.com\"\n",
            "  messaging_sender_id: \"1234567890\"\n",
            "  app_id: \"1:1234567890:web:abcdef\"\n",
            "\n",
            "pad:\n",
            "  default_tool: pen\n",
            "  default_color: \"#112233\"\n",
            "  default_size: 12\n",
            "  min_size: 2\n",
            "  max_size: 48\n",
            "  pen_mode: false\n",
            "\n",
            "gallery:\n",
            "  page_size: 30\n",
            "  like_cooldown_seconds: 10\n",
            "\n",
            "ranking:\n",
            "  timezone: \"Asia/Seoul\"\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: compact\n",
            "\n",
            "manifest:\n",
            "  name: \"Test Drawing\"\n",
            "  short_name: \"Drawing\"\n",
            "  description: \"Test pad\"\n",
            "  theme_color: \"#000000\"\n",
            "  background_color: \"#ffffff\"\n",
            "  display: fullscreen\n",
            "  scope: \"/\"\n",
            "  start_url: \"/pad\"\n",
            "  register_type: prompt\n",
            "  include_assets: [\"favicon.svg\"]\n",
            "  icons:\n",
            "    - src: \"icon-256.png\"\n",
            "      sizes: \"256x256\"\n",
            "      type: \"image/png\"\n"
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::types::DrawingRecord;
    use proptest::prelude::*;

    /// Strategy for a `YYYY-MM-DD` date string inside a few years.
    pub fn date_strategy() -> impl Strategy<Value = String> {
        (2021i32..=2025, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
    }

    /// Strategy for a single drawing record.
    pub fn record_strategy() -> impl Strategy<Value = DrawingRecord> {
        ("[a-z]{1,8}", date_strategy(), 0u64..20, any::<bool>()).prop_map(
            |(name, date, likes, stale_flag)| {
                let mut record = DrawingRecord::new(name, date, likes);
                record.is_monthly_best = stale_flag;
                record
            },
        )
    }

    /// Strategy for a gallery of up to `max` records.
    pub fn gallery_strategy(max: usize) -> impl Strategy<Value = Vec<DrawingRecord>> {
        proptest::collection::vec(record_strategy(), 0..=max)
    }
}
