//! Integration tests for drawpad-state crate.

use drawpad_common::test_utils::drawing_fixtures::{best_names, record};
use drawpad_common::test_utils::{config_fixtures, init_test_logging};
use drawpad_common::{RankingZone, Tool};
use drawpad_config::ConfigLoader;
use drawpad_state::AppState;

fn seoul_app() -> AppState {
    let config = ConfigLoader::parse(config_fixtures::full_config_yaml()).unwrap();
    AppState::new(config)
}

#[test]
fn test_app_state_follows_config() {
    init_test_logging();

    let app = seoul_app();
    assert_eq!(app.pad.tool.get(), Tool::Pen);
    assert_eq!(app.pad.color.get().as_str(), "#112233");
    assert_eq!(app.pad.size.get(), 12);
    assert!(!app.pad.is_pen_mode.get());
    assert_eq!(app.gallery.page_size(), 30);
    assert_eq!(app.config().ranking.timezone.to_string(), "Asia/Seoul");
}

#[test]
fn test_gallery_ranks_in_configured_zone() {
    let app = seoul_app();
    // 16:00 UTC on Jan 31st is already February in Seoul.
    app.gallery
        .replace(vec![
            record("late-jan", "2024-01-31T16:00:00Z", 4),
            record("feb", "2024-02-10", 2),
            record("jan", "2024-01-05", 1),
        ])
        .unwrap();
    assert_eq!(
        best_names(&app.gallery.saved_drawings.get()),
        vec!["late-jan", "jan"]
    );
}

#[tokio::test]
async fn test_confirm_like_flow() {
    let app = std::sync::Arc::new(AppState::default());
    app.gallery
        .replace(vec![record("a", "2024-03-01", 2), record("b", "2024-03-02", 2)])
        .unwrap();

    let mut dialog = app.dialog.state().subscribe();
    let ui = {
        let app = app.clone();
        tokio::spawn(async move {
            dialog.changed().await.unwrap();
            app.dialog.close_dialog(true);
        })
    };

    assert_eq!(app.confirm_like("b").await.unwrap(), Some(3));
    ui.await.unwrap();
    assert_eq!(best_names(&app.gallery.saved_drawings.get()), vec!["b"]);
}

#[tokio::test]
async fn test_declined_like_changes_nothing() {
    let app = std::sync::Arc::new(AppState::default());
    app.gallery.replace(vec![record("a", "2024-03-01", 0)]).unwrap();

    let mut dialog = app.dialog.state().subscribe();
    let ui = {
        let app = app.clone();
        tokio::spawn(async move {
            dialog.changed().await.unwrap();
            app.dialog.close_dialog(false);
        })
    };

    assert_eq!(app.confirm_like("a").await.unwrap(), None);
    ui.await.unwrap();
    assert_eq!(app.gallery.saved_drawings.get()[0].likes, 0);
    assert!(app.gallery.monthly_bests().is_empty());
}

#[test]
fn test_config_cache_shared_with_state() {
    let app = seoul_app();
    app.gallery
        .replace(vec![
            record("late-jan", "2024-01-31T16:00:00Z", 4),
            record("feb", "2024-02-10", 2),
        ])
        .unwrap();
    assert_eq!(best_names(&app.gallery.saved_drawings.get()), vec!["late-jan"]);

    app.config_cache()
        .modify(|config| config.ranking.timezone = RankingZone::Utc);
    assert_eq!(app.config().ranking.timezone, RankingZone::Utc);

    app.gallery.rerank().unwrap();
    assert_eq!(
        best_names(&app.gallery.saved_drawings.get()),
        vec!["late-jan", "feb"]
    );
}
