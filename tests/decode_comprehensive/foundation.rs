//! Adapter Tests
//!
//! URL, date, timezone and coordinate decoding.

use crate::*;
use chrono::{DateTime, FixedOffset, Utc};
use minjson::Coordinate;

// =============================================================================
// URL
// =============================================================================

#[test]
fn test_url() {
    let doc = load_fixture("foundation_types");
    let url: url::Url = doc.get("url").decode().unwrap();
    assert_eq!(url.as_str(), "https://developer.apple.com/swift/");
    assert_eq!(url.host_str(), Some("developer.apple.com"));
}

#[test]
fn test_relative_url_rejected() {
    let doc = Document::parse_str(r#"{"url": "/swift/"}"#);
    let err = doc.get("url").decode::<url::Url>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("Url".into()));
    assert!(err.detail().is_some());
}

#[test]
fn test_url_from_non_string() {
    let doc = load_fixture("types");
    let err = doc.get("integer").decode::<url::Url>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("String".into()));
}

// =============================================================================
// DATE
// =============================================================================

#[test]
fn test_date() {
    let doc = load_fixture("foundation_types");
    let date: DateTime<Utc> = doc.get("date").decode().unwrap();
    assert_eq!(date.timestamp(), 1441069323);
}

#[test]
fn test_date_with_offset() {
    let doc = load_fixture("foundation_types");
    let date: DateTime<FixedOffset> = doc.get("date").decode().unwrap();
    assert_eq!(date.offset().local_minus_utc(), 0);
    assert_eq!(date.timestamp(), 1441069323);
}

#[test]
fn test_date_in_other_layout_rejected() {
    for text in ["2015-09-01T01:02:03Z", "2015-09-01", "2015-09-01T01:02:03+0000"] {
        let node = Node::from(text);
        let err = JsonValue::new(&node).decode::<DateTime<Utc>>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::IncompatibleType("DateTime".into()),
            "accepted {}",
            text
        );
    }
}

// =============================================================================
// TIMEZONE
// =============================================================================

#[test]
fn test_timezone() {
    let doc = load_fixture("foundation_types");
    let tz: jiff::tz::TimeZone = doc.get("timezone").decode().unwrap();
    assert_eq!(tz.iana_name(), Some("America/Los_Angeles"));
}

#[test]
fn test_unknown_timezone_rejected() {
    let doc = Document::parse_str(r#"{"timezone": "Mars/Olympus_Mons"}"#);
    let err = doc.get("timezone").decode::<jiff::tz::TimeZone>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompatibleType("TimeZone".into()));
}

// =============================================================================
// COORDINATE
// =============================================================================

#[test]
fn test_coordinate() {
    let doc = load_fixture("coordinate");
    let coordinate: Coordinate = doc.decode().unwrap();
    assert_eq!(coordinate.latitude, 37.7241452);
    assert_eq!(coordinate.longitude, -122.4409553);
}

#[test]
fn test_coordinate_missing_longitude() {
    let doc = Document::parse_str(r#"{"latitude": 1.5}"#);
    let err = doc.decode::<Coordinate>().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingKey("longitude".into()));
}
