use super::*;
use time::macros::datetime;

#[test]
fn parses_rfc3339_with_offset() {
    let ts = parse_timestamp("2024-03-01T10:30:00+02:00").expect("rfc3339");
    assert_eq!(ts, datetime!(2024-03-01 08:30:00 UTC));
}

#[test]
fn parses_datetime_local_input_as_utc() {
    let ts = parse_timestamp("2024-03-01T10:30").expect("datetime-local");
    assert_eq!(ts, datetime!(2024-03-01 10:30:00 UTC));
}

#[test]
fn parses_naive_seconds_and_fractions() {
    assert_eq!(parse_timestamp("2024-03-01T10:30:15").expect("seconds"), datetime!(2024-03-01 10:30:15 UTC));
    assert_eq!(
        parse_timestamp("2024-03-01T10:30:15.250").expect("fraction"),
        datetime!(2024-03-01 10:30:15.25 UTC)
    );
}

#[test]
fn parses_bare_date_as_midnight() {
    let ts = parse_timestamp(" 2024-12-31 ").expect("date");
    assert_eq!(ts, datetime!(2024-12-31 00:00:00 UTC));
}

#[test]
fn rejects_garbage() {
    let err = parse_timestamp("next tuesday").expect_err("should fail");
    assert_eq!(err, DateTimeParseError("next tuesday".to_owned()));
}

#[test]
fn formats_as_rfc3339() {
    let text = format_timestamp(datetime!(2024-01-01 00:00:00 UTC)).expect("format");
    assert_eq!(text, "2024-01-01T00:00:00Z");
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Holder {
    #[serde(default, with = "rfc3339::option")]
    at: Option<OffsetDateTime>,
}

#[test]
fn optional_serde_treats_blank_and_null_as_none() {
    let blank: Holder = serde_json::from_str(r#"{"at": ""}"#).expect("blank");
    assert!(blank.at.is_none());
    let null: Holder = serde_json::from_str(r#"{"at": null}"#).expect("null");
    assert!(null.at.is_none());
    let missing: Holder = serde_json::from_str("{}").expect("missing");
    assert!(missing.at.is_none());
}

#[test]
fn optional_serde_writes_rfc3339_or_null() {
    let some = Holder { at: Some(datetime!(2024-06-01 12:00:00 UTC)) };
    assert_eq!(serde_json::to_string(&some).expect("json"), r#"{"at":"2024-06-01T12:00:00Z"}"#);
    let none = Holder { at: None };
    assert_eq!(serde_json::to_string(&none).expect("json"), r#"{"at":null}"#);
}
