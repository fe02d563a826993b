//! Hot-swappable configuration handle.

use crate::schema::Config;
use arc_swap::ArcSwap;
use drawpad_common::RankingZone;
use std::sync::Arc;
use tracing::debug;

/// Shared configuration with lock-free reads and atomic replacement.
///
/// Readers hold on to the `Arc` they loaded; a concurrent `replace` or
/// `modify` never changes a snapshot already handed out.
#[derive(Debug)]
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Wraps an initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Timezone the gallery ranks in under the current snapshot.
    pub fn ranking_zone(&self) -> RankingZone {
        self.config.load().ranking.timezone
    }

    /// Swaps in a whole new configuration.
    pub fn replace(&self, config: Config) {
        self.config.store(Arc::new(config));
        debug!("configuration replaced");
    }

    /// Applies `edit` to a copy of the current configuration and publishes it.
    ///
    /// `edit` may run more than once if another writer races this one.
    pub fn modify(&self, edit: impl Fn(&mut Config)) {
        self.config.rcu(|current| {
            let mut next = Config::clone(current);
            edit(&mut next);
            next
        });
        debug!("configuration modified");
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_replace() {
        let cache = ConfigCache::default();
        let before = cache.snapshot();

        let mut next = Config::default();
        next.gallery.page_size = 99;
        cache.replace(next);

        assert_eq!(before.gallery.page_size, 20);
        assert_eq!(cache.snapshot().gallery.page_size, 99);
    }

    #[test]
    fn test_modify_updates_zone() {
        let cache = ConfigCache::default();
        assert_eq!(cache.ranking_zone(), RankingZone::Local);

        cache.modify(|config| config.ranking.timezone = RankingZone::Utc);
        assert_eq!(cache.ranking_zone(), RankingZone::Utc);
    }
}
