// YouTube Data API v3 client for video uploads.
// Docs: https://developers.google.com/youtube/v3/docs/videos/insert

use crate::error::UploadError;
use crate::seo::GeneratedMetadata;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;

const DEFAULT_API_BASE: &str = "https://www.googleapis.com";

// The platform category id is a fixed constant; it is not mapped from the
// user's category selection.
const PLATFORM_CATEGORY_ID: &str = "22"; // People & Blogs

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    api_base: String,
}

// ============================================================================
// Insert-video request structures
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(rename = "categoryId")]
    pub category_id: String,
}

#[derive(Debug, Serialize)]
pub struct VideoStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: String, // "public", "private", "unlisted"
    #[serde(rename = "publishAt", skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<String>,
    #[serde(rename = "selfDeclaredMadeForKids")]
    pub self_declared_made_for_kids: bool,
    #[serde(rename = "madeForKids", skip_serializing_if = "Option::is_none")]
    pub made_for_kids: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct VideoResource {
    pub snippet: VideoSnippet,
    pub status: VideoStatus,
}

#[derive(Debug, Deserialize)]
pub struct VideoUploadResponse {
    pub id: String,
}

// ============================================================================
// Client implementation
// ============================================================================

impl YouTubeClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API host (used by tests).
    pub fn with_base_url(client: Client, base_url: &str) -> Self {
        Self {
            client,
            api_base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload a local video file via the multipart insert-video call.
    /// Single round trip: no retry, no resumable session, no progress.
    pub async fn upload_video(
        &self,
        access_token: &str,
        video_path: &std::path::Path,
        resource: &VideoResource,
    ) -> Result<VideoUploadResponse, UploadError> {
        let metadata_json = serde_json::to_string(resource)
            .map_err(|e| UploadError::Unexpected(format!("Failed to encode metadata: {}", e)))?;

        let file = tokio::fs::File::open(video_path).await?;
        let file_size = file.metadata().await?.len();
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

        let file_name = video_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video.mp4")
            .to_string();

        let form = reqwest::multipart::Form::new()
            .part(
                "snippet",
                reqwest::multipart::Part::text(metadata_json)
                    .mime_str("application/json")
                    .map_err(|e| UploadError::Unexpected(e.to_string()))?,
            )
            .part(
                "media",
                reqwest::multipart::Part::stream_with_length(body, file_size)
                    .file_name(file_name)
                    .mime_str("video/*")
                    .map_err(|e| UploadError::Unexpected(e.to_string()))?,
            );

        let upload_url = format!("{}/upload/youtube/v3/videos", self.api_base);

        tracing::info!(
            "📤 Uploading video to YouTube: {} ({} bytes, privacy: {})",
            resource.snippet.title,
            file_size,
            resource.status.privacy_status
        );

        let response = self
            .client
            .post(&upload_url)
            .query(&[("part", "snippet,status"), ("uploadType", "multipart")])
            .header("Authorization", format!("Bearer {}", access_token))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::PlatformUpload {
                message: format!("YouTube upload request failed: {}", e),
                details: None,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("❌ YouTube upload failed ({}): {}", status, error_text);

            // Pass the platform diagnostic through verbatim
            let details = serde_json::from_str(&error_text)
                .unwrap_or(serde_json::Value::String(error_text));
            return Err(UploadError::PlatformUpload {
                message: format!("YouTube upload failed with status {}", status),
                details: Some(details),
            });
        }

        let upload_response: VideoUploadResponse =
            response.json().await.map_err(|e| UploadError::PlatformUpload {
                message: format!("Invalid YouTube upload response: {}", e),
                details: None,
            })?;

        tracing::info!("✅ Video uploaded to YouTube (ID: {})", upload_response.id);

        Ok(upload_response)
    }
}

// ============================================================================
// Insert-video resource construction
// ============================================================================

/// Build the snippet+status resource for the insert call. A schedule time
/// makes the video private with a `publishAt`; otherwise it goes public
/// immediately. The monetization flag only echoes an extra
/// `madeForKids: false` field.
pub fn build_video_resource(
    metadata: &GeneratedMetadata,
    schedule_time: Option<&str>,
    monetization: bool,
) -> Result<VideoResource, UploadError> {
    let publish_at = schedule_time
        .map(parse_schedule_time)
        .transpose()?
        .map(|dt| dt.to_rfc3339());

    let privacy_status = if publish_at.is_some() {
        "private"
    } else {
        "public"
    };

    Ok(VideoResource {
        snippet: VideoSnippet {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            tags: metadata.tags.clone(),
            category_id: PLATFORM_CATEGORY_ID.to_string(),
        },
        status: VideoStatus {
            privacy_status: privacy_status.to_string(),
            publish_at,
            self_declared_made_for_kids: false,
            made_for_kids: monetization.then_some(false),
        },
    })
}

// The form posts HTML datetime-local strings; full RFC 3339 is accepted too.
// Naive timestamps are taken as UTC.
fn parse_schedule_time(value: &str) -> Result<DateTime<Utc>, UploadError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(UploadError::Unexpected(format!(
        "Invalid schedule time: {}",
        value
    )))
}
