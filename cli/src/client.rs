//! Typed HTTP client for the spaces REST API.

use listings::{ErrorBody, Space, SpaceCreate, SpaceListResponse, SpaceQuery, SpaceUpdate};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone)]
pub struct SpacesClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpacesClient {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is http(s).
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { http: reqwest::Client::new(), base_url: base_url.to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn space_url(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self.url(&format!("{API_PREFIX}/spaces/{id}")),
            None => self.url(&format!("{API_PREFIX}/spaces")),
        }
    }

    pub async fn health(&self) -> Result<Value, CliError> {
        send(self.http.get(self.url("/health"))).await
    }

    pub async fn list(&self, query: &SpaceQuery) -> Result<SpaceListResponse, CliError> {
        send(self.http.get(self.space_url(None)).query(&query.to_pairs())).await
    }

    pub async fn get(&self, id: i64) -> Result<Space, CliError> {
        send(self.http.get(self.space_url(Some(id)))).await
    }

    pub async fn create(&self, payload: &SpaceCreate) -> Result<Space, CliError> {
        send(self.http.post(self.space_url(None)).json(payload)).await
    }

    pub async fn update(&self, id: i64, payload: &SpaceUpdate) -> Result<Space, CliError> {
        send(self.http.request(Method::PUT, self.space_url(Some(id))).json(payload)).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), CliError> {
        let response = self.http.delete(self.space_url(Some(id))).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(CliError::rejected(status.as_u16(), &text))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(CliError::rejected(status.as_u16(), &text));
    }
    Ok(response.json::<T>().await?)
}

/// Human-readable rejection: one `field: message` line per field error.
pub fn describe_rejection(status: u16, body: Option<&ErrorBody>) -> String {
    let Some(body) = body else {
        return format!("server returned HTTP {status}");
    };
    if let Some(message) = body.as_message() {
        return format!("server returned HTTP {status}: {message}");
    }

    let mut out = format!("server returned HTTP {status}:");
    if let listings::Detail::Fields(errors) = &body.detail {
        for err in errors {
            let field = err
                .field()
                .unwrap_or_else(|| err.loc.iter().map(ToString::to_string).collect::<Vec<_>>().join("."));
            out.push_str(&format!("\n  {field}: {}", err.msg));
        }
    }
    out
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
