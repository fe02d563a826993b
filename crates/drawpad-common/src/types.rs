//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::DrawpadError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When a drawing was saved, in whichever shape the record source produced.
///
/// Integers are milliseconds since the Unix epoch. Strings are RFC 3339
/// instants or naive dates/date-times. The object form is the document
/// store's native timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrawingTime {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Textual timestamp.
    Text(String),
    /// Document-store timestamp.
    Timestamp {
        /// Whole seconds since the Unix epoch.
        seconds: i64,
        /// Sub-second part.
        nanoseconds: u32,
    },
}

impl From<i64> for DrawingTime {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<&str> for DrawingTime {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DrawingTime {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for DrawingTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Millis(instant.timestamp_millis())
    }
}

impl fmt::Display for DrawingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{ms}"),
            Self::Text(text) => f.write_str(text),
            Self::Timestamp {
                seconds,
                nanoseconds,
            } => write!(f, "{seconds}.{nanoseconds:09}"),
        }
    }
}

/// A saved drawing as delivered by the gallery backend.
///
/// Fields this crate does not know about (image URL, author, ...) are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingRecord {
    /// Unique drawing name; the gallery's join key.
    pub name: String,
    /// Creation/submission instant.
    pub time: DrawingTime,
    /// Number of likes.
    pub likes: u64,
    /// Whether this drawing is a top-liked drawing of its month.
    #[serde(default)]
    pub is_monthly_best: bool,
    /// Remaining fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DrawingRecord {
    /// Creates a record with no extra fields and the flag cleared.
    pub fn new(name: impl Into<String>, time: impl Into<DrawingTime>, likes: u64) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            likes,
            is_monthly_best: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Adds a pass-through field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Drawing tool selected on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand pen.
    #[default]
    Pen,
    /// Eraser.
    Eraser,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pen => f.write_str("pen"),
            Self::Eraser => f.write_str("eraser"),
        }
    }
}

/// A `#rrggbb` colour, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Black, the pad's starting colour.
    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    /// White, the manifest's default theme colour.
    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// The colour as a `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = DrawpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        match hex {
            Some(hex) => Ok(Self(format!("#{}", hex.to_ascii_lowercase()))),
            None => Err(DrawpadError::validation(format!(
                "'{s}' is not a #rrggbb colour"
            ))),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = DrawpadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_all_time_shapes() {
        let records: Vec<DrawingRecord> = serde_json::from_value(json!([
            {"name": "a", "time": 1_709_251_200_000_i64, "likes": 1},
            {"name": "b", "time": "2024-03-01", "likes": 2},
            {"name": "c", "time": {"seconds": 1_709_251_200, "nanoseconds": 0}, "likes": 3}
        ]))
        .unwrap();

        assert_eq!(records[0].time, DrawingTime::Millis(1_709_251_200_000));
        assert_eq!(records[1].time, DrawingTime::Text("2024-03-01".to_string()));
        assert_eq!(
            records[2].time,
            DrawingTime::Timestamp {
                seconds: 1_709_251_200,
                nanoseconds: 0
            }
        );
        assert!(records.iter().all(|r| !r.is_monthly_best));
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let value = json!({
            "name": "cat",
            "time": "2024-03-01",
            "likes": 4,
            "url": "https://cdn.example/cat.png",
            "author": "muscle"
        });
        let record: DrawingRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.extra.len(), 2);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["url"], "https://cdn.example/cat.png");
        assert_eq!(back["isMonthlyBest"], false);
    }

    #[test]
    fn test_record_requires_likes() {
        let result = serde_json::from_value::<DrawingRecord>(json!({"name": "a", "time": 0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("#FFAA00".parse::<Color>().unwrap().as_str(), "#ffaa00");
        assert!("ffaa00".parse::<Color>().is_err());
        assert!("#ffaa0".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert_eq!(Color::black().to_string(), "#000000");
    }

    #[test]
    fn test_tool_serde() {
        assert_eq!(serde_json::to_string(&Tool::Eraser).unwrap(), "\"eraser\"");
        assert_eq!(serde_json::from_str::<Tool>("\"pen\"").unwrap(), Tool::Pen);
    }
}
