//! Integration tests for drawpad-common crate.

use chrono::{TimeZone, Utc};
use drawpad_common::{
    Color, DrawingRecord, DrawingTime, DrawpadError, ParsedTime, RankingZone,
};

#[test]
fn test_record_from_datetime_uses_millis() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let record = DrawingRecord::new("a", instant, 3);
    assert_eq!(record.time, DrawingTime::Millis(instant.timestamp_millis()));
    assert_eq!(record.time.parse().unwrap(), ParsedTime::Instant(instant));
}

#[test]
fn test_record_json_shape() {
    let record = DrawingRecord::new("cat", "2024-03-01", 2)
        .with_extra("url", serde_json::json!("https://cdn.example/cat.png"));
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "cat",
            "time": "2024-03-01",
            "likes": 2,
            "isMonthlyBest": false,
            "url": "https://cdn.example/cat.png"
        })
    );
}

#[test]
fn test_document_store_timestamp() {
    let time = DrawingTime::Timestamp {
        seconds: 1_704_067_200,
        nanoseconds: 500,
    };
    assert_eq!(RankingZone::Utc.year_month(&time).unwrap(), (2024, 1));
    assert_eq!(time.to_string(), "1704067200.000000500");
}

#[test]
fn test_invalid_time_is_invalid_input() {
    let err = RankingZone::Utc
        .year_month(&DrawingTime::from("not a date"))
        .unwrap_err();
    assert!(matches!(err, DrawpadError::InvalidInput { .. }));
}

#[test]
fn test_color_serde_validates() {
    let ok: Color = serde_json::from_str("\"#ABCDEF\"").unwrap();
    assert_eq!(ok.as_str(), "#abcdef");
    assert!(serde_json::from_str::<Color>("\"red\"").is_err());
}
