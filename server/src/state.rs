//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Listings live entirely in Postgres, so the state is just the pool.

use sqlx::PgPool;

/// Clone is required by Axum; `PgPool` is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
