use std::path::PathBuf;
use std::sync::Arc;

use upload_agent::{app, seo, youtube_client, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize production-grade logging
    init_logging().expect("Failed to initialize logging");

    // Temp directory for spooled uploads and link downloads
    let tmp_dir = std::env::var("TMP_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    if let Err(e) = std::fs::create_dir_all(&tmp_dir) {
        tracing::warn!("Failed to create temp directory {}: {}", tmp_dir.display(), e);
    } else {
        tracing::info!("Temp directory ready: {}", tmp_dir.display());
    }

    let http = reqwest::Client::new();

    // The upload endpoint base is overridable for local testing against a mock
    let youtube = match std::env::var("YOUTUBE_UPLOAD_BASE").ok() {
        Some(base) if !base.is_empty() => {
            tracing::info!("Using YouTube upload base: {}", base);
            youtube_client::YouTubeClient::with_base_url(http.clone(), &base)
        }
        _ => youtube_client::YouTubeClient::new(http.clone()),
    };

    // Immutable SEO template tables, built once and shared across requests
    let seo_templates = seo::SeoTemplates::builtin();
    tracing::info!(
        "SEO templates loaded for categories: {}",
        seo_templates.known_categories().join(", ")
    );

    let shared_state = Arc::new(AppState {
        http,
        youtube,
        seo_templates,
        tmp_dir,
    });

    let router = app(shared_state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, router)
        .await
        .expect("Server error");
}

// Production-grade logging configuration
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,upload_agent=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,upload_agent=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // JSON logging for production log aggregation, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("📺 Upload Agent starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        }
    );

    Ok(())
}
