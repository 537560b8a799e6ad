use super::*;
use crate::detail::LocPart;
use time::macros::datetime;

fn fields(v: Validator) -> Vec<(String, String)> {
    v.into_errors()
        .0
        .into_iter()
        .map(|err| (err.field().unwrap_or_default(), err.kind))
        .collect()
}

#[test]
fn required_text_reports_missing() {
    let mut v = Validator::body();
    assert!(v.required_text(&TITLE, None).is_none());
    let errors = v.into_errors().0;
    assert_eq!(errors[0].msg, MSG_FIELD_REQUIRED);
    assert_eq!(errors[0].kind, "missing");
    assert_eq!(errors[0].loc, vec![LocPart::Key("body".to_owned()), LocPart::Key("title".to_owned())]);
}

#[test]
fn text_is_trimmed_before_length_check() {
    let mut v = Validator::body();
    assert!(v.required_text(&TITLE, Some("  abc   ")).is_none());
    assert_eq!(v.required_text(&TITLE, Some("  Cozy garage ")), Some("Cozy garage".to_owned()));
    assert_eq!(fields(v), vec![("title".to_owned(), "string_too_short".to_owned())]);
}

#[test]
fn text_counts_characters_not_bytes() {
    let mut v = Validator::body();
    assert_eq!(v.required_text(&CITY, Some("Zü")), Some("Zü".to_owned()));
    assert!(v.is_empty());
}

#[test]
fn text_too_long_reports_max() {
    let mut v = Validator::body();
    let long = "x".repeat(51);
    assert!(v.optional_text(&STATE, Some(&long)).is_none());
    let errors = v.into_errors().0;
    assert_eq!(errors[0].msg, "String should have at most 50 characters");
}

#[test]
fn price_must_be_positive_and_rounds_to_cents() {
    let mut v = Validator::body();
    assert_eq!(v.price("price_per_day", Some(12.345)), Some(12.35));
    assert_eq!(v.price("price_per_day", None), None);
    assert!(v.is_empty());
    assert_eq!(v.price("price_per_hour", Some(0.0)), None);
    assert_eq!(v.price("price_per_week", Some(-3.0)), None);
    assert_eq!(v.price("price_per_month", Some(0.004)), None);
    assert_eq!(
        fields(v),
        vec![
            ("price_per_hour".to_owned(), "greater_than".to_owned()),
            ("price_per_week".to_owned(), "greater_than".to_owned()),
            ("price_per_month".to_owned(), "greater_than".to_owned()),
        ]
    );
}

#[test]
fn single_price_rule() {
    let mut none = Validator::body();
    none.single_price([None, None, None, None]);
    assert_eq!(none.into_errors().0[0].msg, MSG_NO_PRICE);

    let mut many = Validator::body();
    many.single_price([Some(1.0), None, Some(5.0), None]);
    assert_eq!(many.into_errors().0[0].msg, MSG_MANY_PRICES);

    let mut one = Validator::body();
    one.single_price([None, Some(80.0), None, None]);
    assert!(one.is_empty());
}

#[test]
fn window_rejects_reversed_dates() {
    let mut v = Validator::body();
    v.window(Some(datetime!(2024-02-01 0:00 UTC)), Some(datetime!(2024-01-01 0:00 UTC)));
    assert_eq!(fields(v), vec![("available_until".to_owned(), "value_error".to_owned())]);

    let mut ok = Validator::body();
    ok.window(Some(datetime!(2024-01-01 0:00 UTC)), Some(datetime!(2024-01-01 0:00 UTC)));
    ok.window(None, Some(datetime!(2024-01-01 0:00 UTC)));
    assert!(ok.is_empty());
}

#[test]
fn timestamp_ignores_blank_and_flags_garbage() {
    let mut v = Validator::body();
    assert!(v.timestamp("available_from", Some("   ")).is_none());
    assert!(v.is_empty());
    assert!(v.timestamp("available_from", Some("soon")).is_none());
    assert_eq!(fields(v), vec![("available_from".to_owned(), "datetime_parsing".to_owned())]);
}

#[test]
fn query_scope_prefixes_loc() {
    let mut v = Validator::query();
    assert!(v.non_negative("min_price", Some(-1.0)).is_none());
    let err = &v.into_errors().0[0];
    assert_eq!(err.loc[0].to_string(), "query");
    assert_eq!(err.field().as_deref(), Some("min_price"));
}

#[test]
fn normalize_tags_trims_and_dedupes() {
    let tags = vec![" WiFi ".to_owned(), String::new(), "Parking".to_owned(), "WiFi".to_owned()];
    assert_eq!(normalize_tags(&tags), vec!["WiFi".to_owned(), "Parking".to_owned()]);
}

#[test]
fn validation_errors_display_joins_locations() {
    let errors = ValidationErrors(vec![
        FieldError::new(&["body", "title"], "Field required", "missing"),
        FieldError::new(&["body", "city"], "Field required", "missing"),
    ]);
    assert_eq!(errors.to_string(), "body.title: Field required; body.city: Field required");
}
