// lib.rs - Main library file that exports all modules

pub mod acquisition;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod seo;
pub mod youtube_client;

use axum::{response::Json, routing::get, Extension, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared, immutable application state: one HTTP client for downloads, the
/// YouTube upload client, the SEO template tables, and the temp directory
/// both acquisition paths spool into.
pub struct AppState {
    pub http: reqwest::Client,
    pub youtube: youtube_client::YouTubeClient,
    pub seo_templates: seo::SeoTemplates,
    pub tmp_dir: PathBuf,
}

/// Build the application router over the shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::upload::upload_routes())
        .route("/api/status", get(api_status))
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

// API Status endpoint
async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    use serde_json::json;

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "features": {
            "file_upload": true,
            "link_download": true,
            "seo_generation": true,
            "scheduled_publish": true,
        },
        "categories": state.seo_templates.known_categories(),
        "endpoints": {
            "upload": "/api/upload",
            "status": "/api/status",
            "form": "/"
        }
    }))
}
