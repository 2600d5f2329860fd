//! PropertyHub - Application Entry Point
//!
//! This is the main entry point for the PropertyHub server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use propertyhub::{
    config::CONFIG,
    db, handlers,
    middleware::logging_middleware,
    services::PgPropertyService,
    state::AppState,
    storage::LocalImageStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PropertyHub server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::connect(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Wire the production service with local image storage
    let images = Arc::new(LocalImageStore::new(CONFIG.storage.media_path.clone()));
    let service = Arc::new(PgPropertyService::new(db_pool, images));

    // Create application state
    let state = AppState::new(service, CONFIG.clone());
    let addr = SocketAddr::new(
        state.config().server.host.parse()?,
        state.config().server.port,
    );

    // Build the router
    let app = Router::new()
        .merge(handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(state.config().upload.max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
