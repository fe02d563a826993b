//! Calendar month bucket keys.

use drawpad_common::{DrawingTime, RankingZone, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, ordered chronologically.
///
/// The full year is part of the key so that January 2023 and January 2024
/// never share a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Creates a key; `month` is 1-based.
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month `time` falls in when read in `zone`.
    pub fn of(time: &DrawingTime, zone: &RankingZone) -> Result<Self> {
        let (year, month) = zone.year_month(time)?;
        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MonthKey::new(2024, 3).to_string(), "2024-03");
        assert_eq!(MonthKey::new(987, 11).to_string(), "0987-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 1),
            MonthKey::new(2023, 12),
            MonthKey::new(2023, 1),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2023, 1),
                MonthKey::new(2023, 12),
                MonthKey::new(2024, 1)
            ]
        );
    }

    #[test]
    fn test_same_month_different_year_differs() {
        let zone = RankingZone::Utc;
        let a = MonthKey::of(&DrawingTime::from("2023-01-15"), &zone).unwrap();
        let b = MonthKey::of(&DrawingTime::from("2024-01-15"), &zone).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.month, b.month);
    }
}
