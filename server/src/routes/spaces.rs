//! Space listing routes.
//!
//! Extractor rejections are taken as `Result` so malformed JSON, query
//! strings, and ids come back as 422 `detail` bodies instead of axum's
//! plain-text defaults. Payloads are validated before the pool is touched.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use listings::{Space, SpaceCreate, SpaceListResponse, SpaceQuery, SpaceUpdate};

use crate::error::ApiError;
use crate::services::space;
use crate::state::AppState;

/// `GET /api/v1/spaces`: filtered, paginated listing.
pub async fn list_spaces(
    State(state): State<AppState>,
    query: Result<Query<SpaceQuery>, QueryRejection>,
) -> Result<Json<SpaceListResponse>, ApiError> {
    let Query(query) = query?;
    let filter = query.validate()?;
    let (spaces, total) = space::list_spaces(&state.pool, &filter).await?;
    Ok(Json(SpaceListResponse::new(spaces, total, &filter)))
}

/// `POST /api/v1/spaces`: create a listing.
pub async fn create_space(
    State(state): State<AppState>,
    body: Result<Json<SpaceCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Space>), ApiError> {
    let Json(body) = body?;
    let new = body.validate()?;
    let created = space::create_space(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/v1/spaces/{id}`: fetch one listing.
pub async fn get_space(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Space>, ApiError> {
    let Path(id) = id?;
    Ok(Json(space::get_space(&state.pool, id).await?))
}

/// `PUT /api/v1/spaces/{id}`: partial update; absent fields are kept,
/// explicit `null` clears optional fields.
pub async fn update_space(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SpaceUpdate>, JsonRejection>,
) -> Result<Json<Space>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let changes = body.validate()?;
    Ok(Json(space::update_space(&state.pool, id, &changes).await?))
}

/// `DELETE /api/v1/spaces/{id}`: remove a listing.
pub async fn delete_space(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    space::delete_space(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "spaces_test.rs"]
mod tests;
