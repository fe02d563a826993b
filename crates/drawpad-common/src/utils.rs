//! Time parsing and timezone policy shared by ranking and configuration.

use crate::error::{DrawpadError, Result};
use crate::types::DrawingTime;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A parsed [`DrawingTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// An absolute instant; converted into the ranking zone before use.
    Instant(DateTime<Utc>),
    /// A wall-clock value with no zone; read as-is in the ranking zone.
    Wall(NaiveDateTime),
}

impl DrawingTime {
    /// Interprets the timestamp, failing with `InvalidInput` when it is not a
    /// valid instant.
    pub fn parse(&self) -> Result<ParsedTime> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(ParsedTime::Instant)
                .ok_or_else(|| DrawpadError::invalid_input(format!("timestamp {ms}ms is out of range"))),
            Self::Timestamp {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds)
                .map(ParsedTime::Instant)
                .ok_or_else(|| {
                    DrawpadError::invalid_input(format!(
                        "timestamp {seconds}s/{nanoseconds}ns is out of range"
                    ))
                }),
            Self::Text(text) => parse_text(text.trim()),
        }
    }
}

fn parse_text(text: &str) -> Result<ParsedTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(ParsedTime::Instant(instant.with_timezone(&Utc)));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Ok(ParsedTime::Instant(instant.with_timezone(&Utc)));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(wall) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(ParsedTime::Wall(wall));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(ParsedTime::Wall)
        .ok_or_else(|| DrawpadError::invalid_input(format!("'{text}' is not a recognised timestamp")))
}

/// Timezone in which instants are bucketed into calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RankingZone {
    /// The host's local timezone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A named IANA timezone.
    Named(Tz),
}

impl RankingZone {
    /// Calendar `(year, month)` of `time` in this zone; `month` is 1-based.
    pub fn year_month(&self, time: &DrawingTime) -> Result<(i32, u32)> {
        let parsed = time.parse()?;
        Ok(match (parsed, self) {
            (ParsedTime::Wall(wall), _) => (wall.year(), wall.month()),
            (ParsedTime::Instant(instant), Self::Utc) => (instant.year(), instant.month()),
            (ParsedTime::Instant(instant), Self::Local) => {
                let local = instant.with_timezone(&Local);
                (local.year(), local.month())
            }
            (ParsedTime::Instant(instant), Self::Named(tz)) => {
                let zoned = instant.with_timezone(tz);
                (zoned.year(), zoned.month())
            }
        })
    }
}

impl FromStr for RankingZone {
    type Err = DrawpadError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::Utc);
        }
        trimmed.parse::<Tz>().map(Self::Named).map_err(|e| {
            DrawpadError::validation_field(format!("unknown timezone '{trimmed}': {e}"), "ranking.timezone")
        })
    }
}

impl TryFrom<String> for RankingZone {
    type Error = DrawpadError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RankingZone> for String {
    fn from(zone: RankingZone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for RankingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}
