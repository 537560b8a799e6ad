use super::*;
use axum::body::to_bytes;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).expect("json"))
}

#[tokio::test]
async fn validation_errors_render_as_field_list() {
    let err = ApiError::Validation(ValidationErrors(vec![FieldError::new(
        &["body", "title"],
        "Field required",
        "missing",
    )]));
    let (status, json) = body_json(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        serde_json::json!({"detail": [{"loc": ["body", "title"], "msg": "Field required", "type": "missing"}]})
    );
}

#[tokio::test]
async fn not_found_renders_message_detail() {
    let (status, json) = body_json(ApiError::NotFound("Space not found")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"detail": "Space not found"}));
}

#[tokio::test]
async fn internal_errors_hide_the_reason() {
    let (status, json) = body_json(ApiError::Internal("connection refused".to_owned())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"detail": "Internal Server Error"}));
}

#[tokio::test]
async fn malformed_input_is_located_by_scope() {
    let err = ApiError::Malformed { scope: "query", kind: "query_invalid", message: "bad page".to_owned() };
    let (status, json) = body_json(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["detail"][0]["loc"], serde_json::json!(["query"]));
    assert_eq!(json["detail"][0]["type"], "query_invalid");
}

#[test]
fn space_errors_map_to_api_errors() {
    assert_eq!(ApiError::from(SpaceError::NotFound(3)).status(), StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::from(SpaceError::Invalid(ValidationErrors(Vec::new()))).status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        ApiError::from(SpaceError::Database(sqlx::Error::RowNotFound)).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
