//! Monthly-best ranking.

use crate::month_key::MonthKey;
use drawpad_common::{DrawingRecord, DrawpadError, RankingZone, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument, warn};

/// Ranks drawings in a fixed timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyBestRanker {
    zone: RankingZone,
}

impl MonthlyBestRanker {
    /// Creates a ranker that buckets months in `zone`.
    pub const fn new(zone: RankingZone) -> Self {
        Self { zone }
    }

    /// The bucketing timezone.
    pub const fn zone(&self) -> RankingZone {
        self.zone
    }

    /// See [`compute_monthly_bests_in`].
    pub fn rank(&self, drawings: &[DrawingRecord]) -> Result<Vec<DrawingRecord>> {
        compute_monthly_bests_in(drawings, &self.zone)
    }

    /// See [`monthly_winners`].
    pub fn winners(&self, drawings: &[DrawingRecord]) -> Result<BTreeMap<MonthKey, Vec<String>>> {
        monthly_winners(drawings, &self.zone)
    }
}

/// Flags the top-liked drawings of each calendar month, bucketing in the
/// host's local timezone.
///
/// Equivalent to [`compute_monthly_bests_in`] with [`RankingZone::Local`].
pub fn compute_monthly_bests(drawings: &[DrawingRecord]) -> Result<Vec<DrawingRecord>> {
    compute_monthly_bests_in(drawings, &RankingZone::Local)
}

/// Flags the top-liked drawings of each calendar month.
///
/// Returns a copy of `drawings` in the same order where `is_monthly_best` is
/// true iff the drawing's likes equal the maximum of its month and that
/// maximum is positive. Ties all win; a month where nobody has a like has no
/// winner. Any other field is copied unchanged and a stale flag on the input
/// is overwritten.
///
/// # Errors
///
/// Returns [`DrawpadError::InvalidInput`] if any drawing's `time` cannot be
/// interpreted. No partial result is produced.
#[instrument(skip(drawings), fields(count = drawings.len(), zone = %zone))]
pub fn compute_monthly_bests_in(
    drawings: &[DrawingRecord],
    zone: &RankingZone,
) -> Result<Vec<DrawingRecord>> {
    let keys = month_keys(drawings, zone)?;
    let max_likes = max_likes_by_month(drawings, &keys);
    debug!(months = max_likes.len(), "bucketed drawings by month");

    Ok(drawings
        .iter()
        .zip(keys)
        .map(|(record, key)| {
            let max = max_likes.get(&key).copied().unwrap_or(0);
            DrawingRecord {
                is_monthly_best: max > 0 && record.likes == max,
                ..record.clone()
            }
        })
        .collect())
}

/// Names of the winning drawings of every month present in `drawings`,
/// months in chronological order. Months without a winner map to an empty
/// list.
///
/// # Errors
///
/// Same as [`compute_monthly_bests_in`].
pub fn monthly_winners(
    drawings: &[DrawingRecord],
    zone: &RankingZone,
) -> Result<BTreeMap<MonthKey, Vec<String>>> {
    let keys = month_keys(drawings, zone)?;
    let max_likes = max_likes_by_month(drawings, &keys);

    let mut winners: BTreeMap<MonthKey, Vec<String>> =
        max_likes.keys().map(|key| (*key, Vec::new())).collect();
    for (record, key) in drawings.iter().zip(&keys) {
        let max = max_likes.get(key).copied().unwrap_or(0);
        if max > 0 && record.likes == max {
            winners.entry(*key).or_default().push(record.name.clone());
        }
    }
    Ok(winners)
}

fn month_keys(drawings: &[DrawingRecord], zone: &RankingZone) -> Result<Vec<MonthKey>> {
    drawings
        .iter()
        .map(|record| {
            MonthKey::of(&record.time, zone).map_err(|e| {
                warn!(name = %record.name, time = %record.time, "rejecting drawing with unreadable time");
                DrawpadError::invalid_input_field(
                    format!("drawing '{}' has an invalid time: {e}", record.name),
                    record.name.clone(),
                )
            })
        })
        .collect()
}

fn max_likes_by_month(drawings: &[DrawingRecord], keys: &[MonthKey]) -> HashMap<MonthKey, u64> {
    let mut max_likes: HashMap<MonthKey, u64> = HashMap::new();
    for (record, key) in drawings.iter().zip(keys) {
        let max = max_likes.entry(*key).or_insert(0);
        *max = (*max).max(record.likes);
    }
    max_likes
}
