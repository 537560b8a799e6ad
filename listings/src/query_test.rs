use super::*;

#[test]
fn empty_query_applies_defaults() {
    let filter = SpaceQuery::default().validate().expect("valid");
    assert_eq!(filter, ListFilter::default());
    assert_eq!(filter.page, 1);
    assert_eq!(filter.per_page, 10);
}

#[test]
fn blank_text_filters_are_dropped() {
    let query = SpaceQuery {
        city: Some("  ".to_owned()),
        search: Some(" garage ".to_owned()),
        space_type: Some(String::new()),
        ..SpaceQuery::default()
    };
    let filter = query.validate().expect("valid");
    assert!(filter.city.is_none());
    assert!(filter.space_type.is_none());
    assert_eq!(filter.search.as_deref(), Some("garage"));
}

#[test]
fn space_type_is_normalized() {
    let query = SpaceQuery { space_type: Some("Backyard".to_owned()), ..SpaceQuery::default() };
    assert_eq!(query.validate().expect("valid").space_type, Some(SpaceType::Backyard));
}

#[test]
fn out_of_range_paging_is_rejected() {
    let query = SpaceQuery { page: Some(0), per_page: Some(101), ..SpaceQuery::default() };
    let errors = query.validate().expect_err("invalid").0;
    let fields: Vec<_> = errors.iter().filter_map(crate::FieldError::field).collect();
    assert_eq!(fields, vec!["page".to_owned(), "per_page".to_owned()]);
    assert_eq!(errors[1].msg, "Input should be less than or equal to 100");
}

#[test]
fn page_beyond_u32_reports_upper_bound() {
    let query = SpaceQuery { page: Some(i64::from(u32::MAX) + 1), ..SpaceQuery::default() };
    let errors = query.validate().expect_err("invalid").0;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, "less_than_equal");
    assert_eq!(errors[0].msg, format!("Input should be less than or equal to {}", u32::MAX));
}

#[test]
fn negative_prices_and_unknown_type_are_rejected() {
    let query = SpaceQuery {
        min_price: Some(-1.0),
        space_type: Some("castle".to_owned()),
        ..SpaceQuery::default()
    };
    let errors = query.validate().expect_err("invalid").0;
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|err| err.loc[0].to_string() == "query"));
}

#[test]
fn to_pairs_skips_unset_and_blank_values() {
    let query = SpaceQuery {
        page: Some(2),
        per_page: Some(12),
        city: Some(" ".to_owned()),
        space_type: Some("garage".to_owned()),
        is_available: Some(true),
        min_price: Some(5.5),
        ..SpaceQuery::default()
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("page", "2".to_owned()),
            ("per_page", "12".to_owned()),
            ("space_type", "garage".to_owned()),
            ("min_price", "5.5".to_owned()),
            ("is_available", "true".to_owned()),
        ]
    );
}

#[test]
fn list_response_computes_total_pages() {
    let filter = ListFilter { per_page: 12, page: 2, ..ListFilter::default() };
    let resp = SpaceListResponse::new(Vec::new(), 25, &filter);
    assert_eq!(resp.total_pages, 3);
    assert_eq!(resp.page, 2);
    assert_eq!(resp.per_page, 12);
}
