use super::*;
use crate::state::test_helpers::test_app_state;
use listings::Detail;

fn field_names(err: &ApiError) -> Vec<String> {
    match err.body().detail {
        Detail::Fields(fields) => fields.iter().filter_map(listings::FieldError::field).collect(),
        Detail::Message(_) => Vec::new(),
    }
}

#[tokio::test]
async fn create_rejects_empty_payload_before_touching_db() {
    let err = create_space(State(test_app_state()), Ok(Json(SpaceCreate::default())))
        .await
        .expect_err("empty payload");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let fields = field_names(&err);
    for required in ["title", "description", "space_type", "location", "address", "city", "state", "zip_code"] {
        assert!(fields.iter().any(|f| f == required), "missing error for {required}: {fields:?}");
    }
    assert!(fields.iter().any(|f| f == "price_per_hour"));
}

#[tokio::test]
async fn create_rejects_two_prices() {
    let body = SpaceCreate {
        title: Some("Two price garage".to_owned()),
        description: Some("A garage listed with both hourly and daily pricing.".to_owned()),
        space_type: Some("garage".to_owned()),
        location: Some("Downtown District".to_owned()),
        address: Some("123 Main Street".to_owned()),
        city: Some("Springfield".to_owned()),
        state: Some("IL".to_owned()),
        zip_code: Some("62701".to_owned()),
        price_per_hour: Some(10.0),
        price_per_day: Some(60.0),
        ..SpaceCreate::default()
    };
    let err = create_space(State(test_app_state()), Ok(Json(body))).await.expect_err("two prices");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&err), vec!["price_per_hour".to_owned()]);
}

#[tokio::test]
async fn list_rejects_out_of_range_paging() {
    let query = SpaceQuery { page: Some(0), per_page: Some(500), ..SpaceQuery::default() };
    let err = list_spaces(State(test_app_state()), Ok(Query(query))).await.expect_err("bad paging");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&err), vec!["page".to_owned(), "per_page".to_owned()]);
}

#[tokio::test]
async fn list_rejects_unknown_space_type() {
    let query = SpaceQuery { space_type: Some("castle".to_owned()), ..SpaceQuery::default() };
    let err = list_spaces(State(test_app_state()), Ok(Query(query))).await.expect_err("bad type");
    assert_eq!(field_names(&err), vec!["space_type".to_owned()]);
}

#[tokio::test]
async fn update_rejects_short_title() {
    let body = SpaceUpdate { title: Some("Hi".to_owned()), ..SpaceUpdate::default() };
    let err = update_space(State(test_app_state()), Ok(Path(1)), Ok(Json(body)))
        .await
        .expect_err("short title");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&err), vec!["title".to_owned()]);
}

#[tokio::test]
async fn update_rejects_non_positive_price() {
    let body = SpaceUpdate { price_per_day: Some(Some(0.0)), ..SpaceUpdate::default() };
    let err = update_space(State(test_app_state()), Ok(Path(1)), Ok(Json(body)))
        .await
        .expect_err("zero price");
    assert_eq!(field_names(&err), vec!["price_per_day".to_owned()]);
}
