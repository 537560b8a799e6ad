//! REST API helpers for the `/api/v1/spaces` endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning [`ApiError::Network`]
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep their status and, when it parses, the `detail`
//! body so the create form can map validation errors back onto its inputs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use listings::{ErrorBody, Space, SpaceCreate, SpaceListResponse, SpaceQuery};

/// Path prefix of the versioned REST API.
pub const API_BASE: &str = "/api/v1";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: Option<ErrorBody> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a failed response's status and raw body.
    pub fn rejected(status: u16, text: &str) -> Self {
        Self::Rejected { status, body: serde_json::from_str(text).ok() }
    }

    /// The parsed `detail` body of a rejection, if any.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Rejected { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

pub fn spaces_url() -> String {
    format!("{API_BASE}/spaces")
}

pub fn space_url(id: i64) -> String {
    format!("{API_BASE}/spaces/{id}")
}

/// Fetch one page of listings matching `query`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or an
/// undecodable body.
pub async fn fetch_spaces(query: &SpaceQuery) -> Result<SpaceListResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let pairs = query.to_pairs();
        let resp = gloo_net::http::Request::get(&spaces_url())
            .query(pairs.iter().map(|(name, value)| (*name, value.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(unavailable())
    }
}

/// Fetch a single listing.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with status 404 for an unknown id.
pub async fn fetch_space(id: i64) -> Result<Space, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&space_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Create a listing.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's field errors on 422.
pub async fn create_space(payload: &SpaceCreate) -> Result<Space, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&spaces_url())
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::rejected(resp.status(), &text));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}
