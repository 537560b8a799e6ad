mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_sample_data {
        match services::seed::seed_sample_spaces(&pool).await {
            Ok(inserted) => tracing::info!(inserted, "sample data seeded"),
            Err(e) => tracing::warn!(error = %e, "sample data seeding failed"),
        }
    }

    let state = state::AppState::new(pool);
    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        origins = ?config.allowed_origins.patterns(),
        static_dir = ?config.static_dir,
        "space rental api listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
