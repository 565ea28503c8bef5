// Input acquisition: multipart form parsing and remote-link download.
// Both paths land the video in the service temp directory under a unique
// name; the caller is told the file was created by this request so the
// upload stage knows it may delete it.

use crate::error::UploadError;
use axum::extract::multipart::Multipart;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Upload size ceiling: 2 GiB, matching the platform's practical limit.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024 * 1024;

/// Typed view of the multipart form. Either the spooled file or the link may
/// be present; a request carrying both silently prefers the file.
#[derive(Debug, Default)]
pub struct UploadFields {
    pub video_path: Option<PathBuf>,
    pub video_link: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub monetization: bool,
    pub schedule_time: Option<String>,
}

impl UploadFields {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("tech")
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("en")
    }
}

/// A video file sitting in local temp storage, ready for upload.
#[derive(Debug)]
pub struct AcquiredVideo {
    pub path: PathBuf,
    /// True when this request created the file (upload spool or download);
    /// only such files are deleted after a successful platform call.
    pub owned: bool,
}

/// Parse the multipart body into typed fields, spooling an uploaded `video`
/// part to the temp directory chunk by chunk.
pub async fn parse_upload_form(
    mut multipart: Multipart,
    tmp_dir: &Path,
) -> Result<UploadFields, UploadError> {
    let mut fields = UploadFields::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Unexpected(format!("Failed to parse upload form: {}", e)))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match name.as_str() {
            "video" => {
                // Browsers submit an empty part when no file was chosen
                let filename = match field.file_name() {
                    Some(f) if !f.is_empty() => f.to_string(),
                    _ => continue,
                };

                let extension = Path::new(&filename)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("mp4");
                let spool_path = tmp_dir.join(format!("upload-{}.{}", Uuid::new_v4(), extension));

                let mut file = fs::File::create(&spool_path).await?;
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    UploadError::Unexpected(format!("Failed to read uploaded file: {}", e))
                })? {
                    file.write_all(&chunk).await?;
                }
                file.flush().await?;

                tracing::info!("📁 Spooled upload '{}' to {}", filename, spool_path.display());
                fields.video_path = Some(spool_path);
            }
            "videoLink" => {
                let link = read_text_field(field, &name).await?;
                if !link.is_empty() {
                    fields.video_link = Some(link);
                }
            }
            "category" => fields.category = Some(read_text_field(field, &name).await?),
            "language" => fields.language = Some(read_text_field(field, &name).await?),
            "monetization" => {
                fields.monetization = read_text_field(field, &name).await? == "true";
            }
            "scheduleTime" => {
                let value = read_text_field(field, &name).await?;
                if !value.is_empty() {
                    fields.schedule_time = Some(value);
                }
            }
            _ => continue,
        }
    }

    Ok(fields)
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, UploadError> {
    field
        .text()
        .await
        .map_err(|e| UploadError::Unexpected(format!("Failed to read field '{}': {}", name, e)))
}

/// Resolve the parsed fields to a local video file: the spooled upload if one
/// was sent, otherwise a streaming download of the remote link. Neither
/// present is a `NoVideoProvided` error.
pub async fn acquire_video(
    fields: &UploadFields,
    http: &reqwest::Client,
    tmp_dir: &Path,
) -> Result<AcquiredVideo, UploadError> {
    if let Some(path) = &fields.video_path {
        return Ok(AcquiredVideo {
            path: path.clone(),
            owned: true,
        });
    }

    if let Some(link) = &fields.video_link {
        let path = download_to_temp(http, link, tmp_dir).await?;
        return Ok(AcquiredVideo { path, owned: true });
    }

    Err(UploadError::NoVideoProvided)
}

/// Stream a remote video to a uniquely named temp file. No retries; the
/// link is not checked to actually be a video resource.
async fn download_to_temp(
    http: &reqwest::Client,
    url: &str,
    tmp_dir: &Path,
) -> Result<PathBuf, UploadError> {
    tracing::info!("📥 Downloading remote video: {}", url);

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| UploadError::Download(format!("Request to {} failed: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(UploadError::Download(format!(
            "Remote server returned {} for {}",
            response.status(),
            url
        )));
    }

    let path = tmp_dir.join(format!("download-{}.mp4", Uuid::new_v4()));
    let mut file = fs::File::create(&path).await?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk =
            chunk.map_err(|e| UploadError::Download(format!("Download stream failed: {}", e)))?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    tracing::info!("✅ Remote video saved to {}", path.display());
    Ok(path)
}
