use super::*;

#[test]
fn parses_field_list_and_keys_by_last_loc_segment() {
    let raw = r#"{"detail":[
        {"loc":["body","title"],"msg":"String should have at least 5 characters","type":"string_too_short"},
        {"loc":["body","amenities",2],"msg":"Input should be a valid string","type":"string_type"},
        {"loc":["body"],"msg":"Invalid JSON","type":"json_invalid"}
    ]}"#;
    let body: ErrorBody = serde_json::from_str(raw).expect("error body");
    let fields = body.field_errors();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("title").map(String::as_str), Some("String should have at least 5 characters"));
    assert_eq!(fields.get("2").map(String::as_str), Some("Input should be a valid string"));
    assert!(body.as_message().is_none());
}

#[test]
fn later_errors_for_same_field_win() {
    let errors = vec![
        FieldError::new(&["body", "price_per_hour"], "first", "value_error"),
        FieldError::new(&["body", "price_per_hour"], "second", "value_error"),
    ];
    let fields = field_errors(&errors);
    assert_eq!(fields.get("price_per_hour").map(String::as_str), Some("second"));
}

#[test]
fn message_detail_has_no_field_errors() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Space not found"}"#).expect("error body");
    assert_eq!(body.as_message(), Some("Space not found"));
    assert!(body.field_errors().is_empty());
}

#[test]
fn missing_type_defaults_to_empty() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body","city"],"msg":"Field required"}]}"#).expect("error body");
    let Detail::Fields(errors) = &body.detail else {
        panic!("expected field list");
    };
    assert_eq!(errors[0].kind, "");
}

#[test]
fn serializes_with_type_key() {
    let body = ErrorBody::fields(vec![FieldError::new(&["query", "page"], "bad", "greater_than_equal")]);
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(
        json,
        serde_json::json!({"detail": [{"loc": ["query", "page"], "msg": "bad", "type": "greater_than_equal"}]})
    );
}
