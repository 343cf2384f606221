pub mod error;
pub mod html;
pub mod routes;
pub mod source;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::source::SourceClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<SourceClient>,
    /// Location of the JSON exercise source.
    pub source_url: String,
}

/// Build the router serving exercise pages.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/exercises", get(routes::pages::show_all))
        .route("/exercises/:id", get(routes::pages::show_by_id))
        .route("/exercises/:id/check", post(routes::pages::check))
        .route("/notions/:notion", get(routes::pages::show_by_notion))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source_url = std::env::var("SOURCE_URL").expect("SOURCE_URL must be set");

    let state = AppState {
        source: Arc::new(SourceClient::new()?),
        source_url,
    };

    let app = build_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
