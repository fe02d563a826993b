//! Gallery state: loaded drawings, paging flags and likes.

use crate::cooldown::LikeCooldowns;
use crate::store::{FlagGuard, Store};
use drawpad_common::{DrawingRecord, DrawpadError, Result};
use drawpad_config::ConfigCache;
use drawpad_ranking::MonthlyBestRanker;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Drawings shown in the gallery, kept ranked.
///
/// Every write to `saved_drawings` goes through the ranker, so the
/// `is_monthly_best` flags always reflect the whole loaded gallery. Each
/// ranking reads the zone from the shared configuration; after changing
/// `ranking.timezone`, call [`GalleryState::rerank`] to refresh the flags.
#[derive(Debug)]
pub struct GalleryState {
    /// Loaded drawings, newest page last.
    pub saved_drawings: Store<Vec<DrawingRecord>>,
    /// A page fetch is in flight.
    pub is_loading: Store<bool>,
    /// The last page has been loaded.
    pub is_end: Store<bool>,
    cooldowns: LikeCooldowns,
    config: Arc<ConfigCache>,
    page_size: usize,
}

impl GalleryState {
    /// Creates an empty gallery. Paging and cooldowns are fixed from the
    /// current snapshot; the ranking zone follows later changes.
    pub fn new(config: Arc<ConfigCache>) -> Self {
        let snapshot = config.snapshot();
        Self {
            saved_drawings: Store::new(Vec::new()),
            is_loading: Store::new(false),
            is_end: Store::new(false),
            cooldowns: LikeCooldowns::from_config(&snapshot.gallery),
            page_size: snapshot.gallery.page_size,
            config,
        }
    }

    fn ranker(&self) -> MonthlyBestRanker {
        MonthlyBestRanker::new(self.config.ranking_zone())
    }

    /// Number of drawings requested per page.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Like cooldown tracker.
    pub const fn cooldowns(&self) -> &LikeCooldowns {
        &self.cooldowns
    }

    /// Marks a page fetch as in flight until the guard drops. Returns `None`
    /// while another fetch is running or once the end has been reached.
    pub fn begin_loading(&self) -> Option<FlagGuard<'_>> {
        if self.is_end.get() {
            return None;
        }
        self.is_loading.try_raise()
    }

    /// Replaces the gallery with a freshly loaded first page.
    ///
    /// Fails without touching the gallery if any drawing has an invalid time.
    pub fn replace(&self, first_page: Vec<DrawingRecord>) -> Result<()> {
        let ranked = self.ranker().rank(&first_page)?;
        let is_end = ranked.len() < self.page_size;
        info!(count = ranked.len(), is_end, "gallery replaced");

        self.saved_drawings.set(ranked);
        self.is_end.set(is_end);
        Ok(())
    }

    /// Appends the next page and re-ranks the whole gallery. Drawings whose
    /// name is already loaded are skipped. Returns how many were added.
    ///
    /// Fails without touching the gallery if any drawing has an invalid time.
    pub fn append_page(&self, page: Vec<DrawingRecord>) -> Result<usize> {
        let page_len = page.len();
        let ranker = self.ranker();
        let mut outcome = Ok(0);

        self.saved_drawings.update_if(|drawings| {
            let mut known: HashSet<String> = drawings.iter().map(|d| d.name.clone()).collect();
            let fresh: Vec<DrawingRecord> = page
                .into_iter()
                .filter(|d| known.insert(d.name.clone()))
                .collect();
            let added = fresh.len();

            let mut combined = drawings.clone();
            combined.extend(fresh);
            match ranker.rank(&combined) {
                Ok(ranked) => {
                    *drawings = ranked;
                    outcome = Ok(added);
                    added > 0
                }
                Err(e) => {
                    outcome = Err(e);
                    false
                }
            }
        });

        let added = outcome?;
        if page_len < self.page_size {
            self.is_end.set(true);
        }
        debug!(page_len, added, "gallery page appended");
        Ok(added)
    }

    /// Adds a like to `name` and re-ranks. Returns the new like count.
    ///
    /// Fails with `InvalidInput` for an unknown drawing and with `Cooldown`
    /// while the drawing's previous like is too recent.
    pub fn like(&self, name: &str) -> Result<u64> {
        let ranker = self.ranker();
        let mut outcome = Err(DrawpadError::invalid_input_field(
            format!("no drawing named '{name}' in the gallery"),
            name,
        ));

        self.saved_drawings.update_if(|drawings| {
            let Some(index) = drawings.iter().position(|d| d.name == name) else {
                return false;
            };
            if let Err(e) = self.cooldowns.try_acquire(name) {
                outcome = Err(e);
                return false;
            }

            let mut next = drawings.clone();
            next[index].likes = next[index].likes.saturating_add(1);
            match ranker.rank(&next) {
                Ok(ranked) => {
                    outcome = Ok(ranked[index].likes);
                    *drawings = ranked;
                    true
                }
                Err(e) => {
                    outcome = Err(e);
                    false
                }
            }
        });

        let likes = outcome?;
        debug!(name, likes, "drawing liked");
        Ok(likes)
    }

    /// Re-ranks the loaded drawings in the currently configured zone.
    pub fn rerank(&self) -> Result<()> {
        let ranker = self.ranker();
        let mut outcome = Ok(());

        self.saved_drawings.update_if(|drawings| match ranker.rank(drawings) {
            Ok(ranked) => {
                let changed = ranked != *drawings;
                *drawings = ranked;
                changed
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });

        outcome?;
        debug!(zone = %ranker.zone(), "gallery re-ranked");
        Ok(())
    }

    /// Drawings currently flagged as best of their month, in gallery order.
    pub fn monthly_bests(&self) -> Vec<DrawingRecord> {
        self.saved_drawings.with(|drawings| {
            drawings
                .iter()
                .filter(|d| d.is_monthly_best)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpad_common::test_utils::drawing_fixtures::{best_names, record, sample_gallery};
    use drawpad_common::RankingZone;
    use drawpad_config::Config;

    fn gallery(page_size: usize, cooldown: u64) -> GalleryState {
        let mut config = Config::default();
        config.gallery.page_size = page_size;
        config.gallery.like_cooldown_seconds = cooldown;
        config.ranking.timezone = RankingZone::Utc;
        GalleryState::new(Arc::new(ConfigCache::new(config)))
    }

    #[test]
    fn test_replace_ranks_and_sets_end() {
        let state = gallery(20, 0);
        state.replace(sample_gallery()).unwrap();

        assert_eq!(
            best_names(&state.saved_drawings.get()),
            vec!["dec-top", "jan-a", "jan-b", "jan-old"]
        );
        assert!(state.is_end.get());
    }

    #[test]
    fn test_replace_rejects_bad_time_and_keeps_gallery() {
        let state = gallery(20, 0);
        state.replace(vec![record("a", "2024-03-01", 1)]).unwrap();

        let err = state
            .replace(vec![record("b", "whenever", 1)])
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(state.saved_drawings.get()[0].name, "a");
    }

    #[test]
    fn test_append_page_reranks_across_pages() {
        let state = gallery(2, 0);
        state
            .replace(vec![record("a", "2024-03-01", 3), record("b", "2024-03-02", 1)])
            .unwrap();
        assert!(!state.is_end.get());

        let added = state
            .append_page(vec![record("b", "2024-03-02", 1), record("c", "2024-03-03", 9)])
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(best_names(&state.saved_drawings.get()), vec!["c"]);
        assert!(!state.is_end.get());

        state.append_page(vec![record("d", "2024-04-01", 2)]).unwrap();
        assert!(state.is_end.get());
        assert_eq!(state.monthly_bests().len(), 2);
    }

    #[test]
    fn test_append_page_skips_repeated_names_within_page() {
        let state = gallery(20, 0);
        state.replace(vec![record("a", "2024-03-01", 1)]).unwrap();

        let added = state
            .append_page(vec![record("b", "2024-03-02", 1), record("b", "2024-03-05", 7)])
            .unwrap();
        assert_eq!(added, 1);

        let drawings = state.saved_drawings.get();
        assert_eq!(drawings.len(), 2);
        assert_eq!(drawings.iter().filter(|d| d.name == "b").count(), 1);
        assert_eq!(best_names(&drawings), vec!["a", "b"]);
    }

    #[test]
    fn test_zone_change_applies_on_rerank() {
        let state = gallery(20, 0);
        // 16:00 UTC on Jan 31st is already February in Seoul.
        state
            .replace(vec![
                record("edge", "2024-01-31T16:00:00Z", 3),
                record("feb", "2024-02-10", 2),
            ])
            .unwrap();
        assert_eq!(best_names(&state.saved_drawings.get()), vec!["edge", "feb"]);

        state.config.modify(|config| {
            config.ranking.timezone = "Asia/Seoul".parse().unwrap();
        });
        state.rerank().unwrap();
        assert_eq!(best_names(&state.saved_drawings.get()), vec!["edge"]);
    }

    #[test]
    fn test_like_promotes_drawing() {
        let state = gallery(20, 0);
        state
            .replace(vec![record("a", "2024-03-01", 1), record("b", "2024-03-02", 0)])
            .unwrap();

        assert_eq!(state.like("b").unwrap(), 1);
        assert_eq!(best_names(&state.saved_drawings.get()), vec!["a", "b"]);
    }

    #[test]
    fn test_like_unknown_and_cooldown() {
        let state = gallery(20, 60);
        state.replace(vec![record("a", "2024-03-01", 0)]).unwrap();

        assert!(state.like("missing").unwrap_err().is_invalid_input());
        assert_eq!(state.like("a").unwrap(), 1);
        assert!(matches!(
            state.like("a").unwrap_err(),
            DrawpadError::Cooldown { .. }
        ));
        assert_eq!(state.saved_drawings.get()[0].likes, 1);
    }

    #[test]
    fn test_loading_guard() {
        let state = gallery(20, 0);
        {
            let _guard = state.begin_loading().expect("not loading yet");
            assert!(state.is_loading.get());
            assert!(state.begin_loading().is_none());
        }
        assert!(!state.is_loading.get());

        state.is_end.set(true);
        assert!(state.begin_loading().is_none());
    }
}
