//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST API under `/api/v1` plus the root and health
//! endpoints. When a built web client directory is configured it is served
//! as the fallback, with `index.html` answering unknown paths so client-side
//! navigation survives a reload.

pub mod spaces;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::{AllowedOrigins, Config};
use crate::state::AppState;

/// Versioned REST routes.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/spaces", get(spaces::list_spaces).post(spaces::create_space))
        .route(
            "/spaces/{id}",
            get(spaces::get_space)
                .put(spaces::update_space)
                .delete(spaces::delete_space),
        )
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let origins = origins.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin.to_str().is_ok_and(|origin| origins.matches(origin))
        }))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Full application router.
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .with_state(state);

    let router = match &config.static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router,
    };

    router
        .layer(cors_layer(&config.allowed_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Space Rental API running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
