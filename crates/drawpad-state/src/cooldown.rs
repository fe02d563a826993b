//! Per-drawing like cooldowns

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use drawpad_common::{DrawpadError, Result};
use drawpad_config::GalleryConfig;
use std::time::{Duration, Instant};
use tracing::debug;

/// Tracks when each drawing was last liked and refuses repeat likes until
/// the cooldown has elapsed.
#[derive(Debug)]
pub struct LikeCooldowns {
    duration: Duration,
    last_liked: DashMap<String, Instant>,
}

impl LikeCooldowns {
    /// Create a tracker with the given cooldown.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_liked: DashMap::new(),
        }
    }

    /// Create a tracker using the gallery's configured cooldown.
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(Duration::from_secs(config.like_cooldown_seconds))
    }

    /// Records a like on `name`, or fails with `DrawpadError::Cooldown` if the
    /// previous like is too recent.
    pub fn try_acquire(&self, name: &str) -> Result<()> {
        let now = Instant::now();
        match self.last_liked.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                let elapsed = now.duration_since(*entry.get());
                if elapsed < self.duration {
                    let remaining_ms =
                        u64::try_from((self.duration - elapsed).as_millis()).unwrap_or(u64::MAX);
                    debug!(name, remaining_ms, "like refused");
                    return Err(DrawpadError::Cooldown {
                        name: name.to_string(),
                        remaining_ms,
                    });
                }
                entry.insert(now);
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
            }
        }
        Ok(())
    }

    /// Time left before `name` can be liked again.
    pub fn remaining(&self, name: &str) -> Option<Duration> {
        let last = *self.last_liked.get(name)?;
        self.duration
            .checked_sub(last.elapsed())
            .filter(|left| !left.is_zero())
    }

    /// Whether `name` is still cooling down.
    pub fn is_cooling(&self, name: &str) -> bool {
        self.remaining(name).is_some()
    }

    /// Number of drawings tracked.
    pub fn active(&self) -> usize {
        self.last_liked.len()
    }

    /// Drops entries whose cooldown has elapsed, returning how many were removed.
    pub fn clear_expired(&self) -> usize {
        let before = self.last_liked.len();
        self.last_liked
            .retain(|_, liked_at| liked_at.elapsed() < self.duration);
        let removed = before.saturating_sub(self.last_liked.len());
        debug!(removed, "cleaned up expired like cooldowns");
        removed
    }
}
