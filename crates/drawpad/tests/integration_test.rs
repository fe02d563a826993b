//! Integration tests for the drawpad binary crate.

use drawpad::{load_config, rank_json, render_config, render_manifest};
use drawpad_common::test_utils::{config_fixtures, init_test_logging};
use drawpad_common::RankingZone;
use std::io::Write;

fn config_file(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_explicit_path() {
    init_test_logging();

    let file = config_file(config_fixtures::full_config_yaml());
    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.ranking.timezone.to_string(), "Asia/Seoul");
    assert_eq!(config.gallery.page_size, 30);
}

#[test]
fn test_load_config_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(dir.path().join("absent.yaml").as_path())).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_rank_in_configured_zone() {
    let file = config_file(config_fixtures::full_config_yaml());
    let config = load_config(Some(file.path())).unwrap();

    // 16:00 UTC on Jan 31st is February in Seoul but still January in UTC.
    let gallery = r#"[
        {"name": "edge", "time": "2024-01-31T16:00:00Z", "likes": 3},
        {"name": "jan", "time": "2024-01-10", "likes": 1},
        {"name": "feb", "time": "2024-02-10", "likes": 2}
    ]"#;

    let seoul = rank_json(gallery, config.ranking.timezone, true).unwrap();
    assert_eq!(seoul, "2024-01: jan\n2024-02: edge\n");

    let utc = rank_json(gallery, RankingZone::Utc, true).unwrap();
    assert_eq!(utc, "2024-01: edge\n2024-02: feb\n");
}

#[test]
fn test_manifest_and_config_follow_file() {
    let file = config_file(config_fixtures::full_config_yaml());
    let config = load_config(Some(file.path())).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&render_manifest(&config).unwrap()).unwrap();
    assert_eq!(manifest["name"], "Test Drawing");
    assert_eq!(manifest["display"], "fullscreen");
    assert_eq!(manifest["start_url"], "/pad");

    let yaml = render_config(&config).unwrap();
    assert!(yaml.contains("Asia/Seoul"));
}
