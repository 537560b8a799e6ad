//! HTTP error responses.
//!
//! Every failure leaves the server as `{"detail": ...}`: a plain message for
//! 404/500 and a field error list for 422, the shape the web form maps back
//! onto its inputs.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use listings::{ErrorBody, FieldError, ValidationErrors};

use crate::services::space::SpaceError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("malformed {scope}: {message}")]
    Malformed { scope: &'static str, kind: &'static str, message: String },
    #[error("{0}")]
    NotFound(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Malformed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(errors) => errors.clone().into_body(),
            Self::Malformed { scope, kind, message } => {
                ErrorBody::fields(vec![FieldError::new(&[*scope], message.clone(), kind)])
            }
            Self::NotFound(msg) => ErrorBody::message(*msg),
            Self::Internal(_) => ErrorBody::message("Internal Server Error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(reason) = &self {
            tracing::error!(%reason, "request failed");
        }
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<SpaceError> for ApiError {
    fn from(err: SpaceError) -> Self {
        match err {
            SpaceError::NotFound(_) => Self::NotFound("Space not found"),
            SpaceError::Invalid(errors) => Self::Validation(errors),
            SpaceError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed { scope: "body", kind: "json_invalid", message: rejection.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed { scope: "query", kind: "query_invalid", message: rejection.body_text() }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed { scope: "path", kind: "path_invalid", message: rejection.body_text() }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
