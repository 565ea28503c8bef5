// Upload orchestration: authenticate, acquire the video, generate SEO
// metadata, push to YouTube, clean up, respond.

use crate::acquisition::{self, MAX_UPLOAD_BYTES};
use crate::error::UploadError;
use crate::middleware::auth::SessionToken;
use crate::youtube_client::build_video_resource;
use crate::AppState;
use axum::{
    extract::{multipart::Multipart, DefaultBodyLimit, Extension},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn upload_routes() -> Router {
    Router::new()
        .route(
            "/api/upload",
            post(upload_video).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

// axum's default 405 carries an empty body; the API contract wants JSON.
async fn method_not_allowed() -> UploadError {
    UploadError::MethodNotAllowed
}

/// POST /api/upload — multipart form with a video file or a remote link plus
/// category/language/monetization/scheduleTime fields.
///
/// Each stage returns an explicit error; the temp file is removed only after
/// a successful platform call, and only when this request created it.
pub async fn upload_video(
    Extension(state): Extension<Arc<AppState>>,
    session: SessionToken,
    multipart: Multipart,
) -> Result<Json<Value>, UploadError> {
    let fields = acquisition::parse_upload_form(multipart, &state.tmp_dir).await?;

    tracing::info!(
        "🎬 Upload request: category={}, language={}, monetization={}, scheduled={}",
        fields.category(),
        fields.language(),
        fields.monetization,
        fields.schedule_time.is_some()
    );

    let video = acquisition::acquire_video(&fields, &state.http, &state.tmp_dir).await?;

    let metadata = {
        let mut rng = rand::thread_rng();
        state
            .seo_templates
            .generate(fields.category(), fields.language(), &mut rng)
    };

    let resource = build_video_resource(
        &metadata,
        fields.schedule_time.as_deref(),
        fields.monetization,
    )?;

    let upload = state
        .youtube
        .upload_video(&session.0, &video.path, &resource)
        .await?;

    if video.owned {
        if let Err(e) = tokio::fs::remove_file(&video.path).await {
            tracing::warn!(
                "Failed to remove temp file {}: {}",
                video.path.display(),
                e
            );
        }
    }

    Ok(Json(json!({
        "success": true,
        "videoId": upload.id,
        "title": metadata.title,
        "description": metadata.description,
        "tags": metadata.tags,
        "hashtags": metadata.hashtags,
        "thumbnailPrompt": metadata.thumbnail_prompt,
        "scheduledTime": fields.schedule_time,
    })))
}
