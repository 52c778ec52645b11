//! Tests for observation time bucketing and formatting.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use wind_common::{ObservationTime, TimeParseError, BUCKET_MINUTES};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

// ============================================================================
// Bucket alignment
// ============================================================================

#[test]
fn test_every_minute_maps_into_its_bucket() {
    for minute in 0..60 {
        let t = ObservationTime::bucketed(dt(2024, 3, 1, 8, minute, 30));
        let aligned = t.datetime();
        assert_eq!(aligned.minute() % BUCKET_MINUTES, 0);
        assert_eq!(aligned.second(), 0);
        assert!(aligned <= dt(2024, 3, 1, 8, minute, 30));
        assert!(dt(2024, 3, 1, 8, minute, 30) - aligned < chrono::Duration::minutes(5));
    }
}

#[test]
fn test_bucket_does_not_cross_day_boundary() {
    let t = ObservationTime::bucketed(dt(2024, 1, 1, 0, 2, 59));
    assert_eq!(t.datetime(), dt(2024, 1, 1, 0, 0, 0));
}

#[test]
fn test_ordering_follows_wall_clock() {
    let early = ObservationTime::bucketed(dt(2024, 1, 1, 9, 0, 0));
    let late = ObservationTime::bucketed(dt(2024, 1, 1, 9, 5, 0));
    assert!(early < late);
}

// ============================================================================
// Query stamps and labels
// ============================================================================

#[test]
fn test_query_stamp_is_fourteen_digits() {
    let t = ObservationTime::bucketed(dt(2009, 7, 4, 6, 33, 12));
    let stamp = t.query_stamp();
    assert_eq!(stamp, "20090704063000");
    assert_eq!(stamp.len(), 14);
}

#[test]
fn test_query_stamp_round_trips() {
    let t = ObservationTime::bucketed(dt(2021, 11, 30, 17, 45, 0));
    let parsed = ObservationTime::from_query_stamp(&t.query_stamp()).unwrap();
    assert_eq!(parsed, t);
}

#[test]
fn test_label_has_no_leading_zero_hour_and_lowercase_meridiem() {
    let t = ObservationTime::bucketed(dt(2009, 7, 4, 6, 33, 12));
    assert_eq!(t.display_label(), "6:30 am on July 04, 2009");
}

#[test]
fn test_label_two_digit_hour() {
    let t = ObservationTime::bucketed(dt(2021, 11, 30, 22, 45, 0));
    assert_eq!(t.display_label(), "10:45 pm on November 30, 2021");
}

#[test]
fn test_display_is_readable() {
    let t = ObservationTime::bucketed(dt(2021, 11, 30, 22, 47, 0));
    assert_eq!(t.to_string(), "2021-11-30 22:45:00");
}

#[test]
fn test_invalid_stamp_error_message() {
    let err = ObservationTime::from_query_stamp("now").unwrap_err();
    assert!(matches!(err, TimeParseError::InvalidFormat(ref s) if s == "now"));
    assert!(err.to_string().contains("YYYYMMDDHHMMSS"));
}

#[test]
fn test_serde_round_trip() {
    let t = ObservationTime::bucketed(dt(2021, 11, 30, 22, 47, 0));
    let json = serde_json::to_string(&t).unwrap();
    let back: ObservationTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
