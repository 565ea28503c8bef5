//! Endpoint integration tests driving the full router against a mocked
//! YouTube upload API. No real network, no real credentials.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use upload_agent::{app, seo::SeoTemplates, youtube_client::YouTubeClient, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

const GAMING_TITLES: [&str; 5] = [
    "🎮 Epic Gaming Moments: Unbelievable Gameplay",
    "🏆 Pro Gamer Tips: Level Up Your Skills",
    "🔥 Complete Gaming Walkthrough: All Secrets Revealed",
    "⚔️ Ultimate Gaming Guide: Win Every Match",
    "💎 Hidden Gaming Secrets & Easter Eggs",
];

/// Test fixture: router wired to a wiremock YouTube and an isolated temp dir.
struct TestApp {
    router: axum::Router,
    _tmp: TempDir,
    tmp_path: std::path::PathBuf,
}

async fn test_app(mock_server: &MockServer) -> TestApp {
    let tmp = TempDir::new().expect("temp dir");
    let tmp_path = tmp.path().to_path_buf();
    let http = reqwest::Client::new();

    let state = Arc::new(AppState {
        http: http.clone(),
        youtube: YouTubeClient::with_base_url(http, &mock_server.uri()),
        seo_templates: SeoTemplates::builtin(),
        tmp_dir: tmp_path.clone(),
    });

    TestApp {
        router: app(state),
        _tmp: tmp,
        tmp_path,
    }
}

async fn mount_upload_ok(mock_server: &MockServer, video_id: &str) {
    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": video_id })),
        )
        .mount(mock_server)
        .await;
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"video\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: video/mp4\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>, authorized: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if authorized {
        builder = builder.header(header::AUTHORIZATION, "Bearer test-access-token");
    }
    builder.body(Body::from(body)).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response should be JSON")
}

#[tokio::test]
async fn rejects_request_without_video_or_link() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server).await;

    let body = multipart_body(&[("category", "tech"), ("language", "en")], None);
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["error"], "No video provided");
}

#[tokio::test]
async fn rejects_request_without_credentials() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server).await;

    let body = multipart_body(
        &[("category", "gaming")],
        Some(("clip.mp4", b"fake video bytes" as &[u8])),
    );
    let response = app
        .router
        .oneshot(upload_request(body, false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let payload = json_body(response).await;
    assert_eq!(payload["error"], "Not authenticated");
}

#[tokio::test]
async fn rejects_non_post_with_json_body() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/upload")
        .body(Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let payload = json_body(response).await;
    assert_eq!(payload["error"], "Method not allowed");
}

#[tokio::test]
async fn uploads_file_and_returns_generated_metadata() {
    let mock_server = MockServer::start().await;
    mount_upload_ok(&mock_server, "yt-video-123").await;
    let app = test_app(&mock_server).await;

    let body = multipart_body(
        &[("category", "gaming"), ("language", "en")],
        Some(("gameplay.mp4", b"fake video bytes" as &[u8])),
    );
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;

    assert_eq!(payload["success"], true);
    assert_eq!(payload["videoId"], "yt-video-123");

    let title = payload["title"].as_str().unwrap();
    assert!(
        GAMING_TITLES.contains(&title),
        "title should come from the gaming list: {}",
        title
    );

    let tags: Vec<&str> = payload["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert!(tags.contains(&"gaming"));
    assert!(tags.len() <= 15);

    let hashtags = payload["hashtags"].as_str().unwrap();
    assert!(hashtags.starts_with("#gaming "));
    assert_eq!(hashtags.split(' ').count(), 5);

    assert!(payload["thumbnailPrompt"].as_str().unwrap().contains("gaming theme"));
    assert!(payload["scheduledTime"].is_null());

    // The platform saw a public, unscheduled upload
    let requests = mock_server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/upload/youtube/v3/videos")
        .expect("upload call should have reached the platform");
    let raw = String::from_utf8_lossy(&upload.body);
    assert!(raw.contains("\"privacyStatus\":\"public\""));
    assert!(!raw.contains("publishAt"));
    assert!(raw.contains("\"categoryId\":\"22\""));
}

#[tokio::test]
async fn scheduled_upload_is_sent_private_with_publish_at() {
    let mock_server = MockServer::start().await;
    mount_upload_ok(&mock_server, "yt-video-sched").await;
    let app = test_app(&mock_server).await;

    let body = multipart_body(
        &[
            ("category", "tech"),
            ("scheduleTime", "2026-09-01T18:30"),
            ("monetization", "true"),
        ],
        Some(("demo.mp4", b"fake video bytes" as &[u8])),
    );
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["scheduledTime"], "2026-09-01T18:30");

    let requests = mock_server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/upload/youtube/v3/videos")
        .unwrap();
    let raw = String::from_utf8_lossy(&upload.body);
    assert!(raw.contains("\"privacyStatus\":\"private\""));
    assert!(raw.contains("\"publishAt\":\"2026-09-01T18:30:00"));
    assert!(raw.contains("\"madeForKids\":false"));
}

#[tokio::test]
async fn downloads_link_uploads_and_cleans_temp_storage() {
    let mock_server = MockServer::start().await;
    mount_upload_ok(&mock_server, "yt-video-link").await;
    Mock::given(method("GET"))
        .and(path("/media/source.mp4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(b"remote video bytes".to_vec()),
        )
        .mount(&mock_server)
        .await;
    let app = test_app(&mock_server).await;

    let link = format!("{}/media/source.mp4", mock_server.uri());
    let body = multipart_body(&[("category", "vlog"), ("videoLink", &link)], None);
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["videoId"], "yt-video-link");

    // Temp file was created for the download and removed after the upload
    let leftovers: Vec<_> = std::fs::read_dir(&app.tmp_path)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert!(
        leftovers.is_empty(),
        "temp dir should be empty, found: {:?}",
        leftovers
    );
}

#[tokio::test]
async fn unreachable_link_maps_to_download_failure() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server).await;

    let link = format!("{}/media/missing.mp4", mock_server.uri());
    let body = multipart_body(&[("videoLink", &link)], None);
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .starts_with("Download failed"));
}

#[tokio::test]
async fn platform_error_surfaces_diagnostic_details() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "The request cannot be completed because you have exceeded your quota." }
        })))
        .mount(&mock_server)
        .await;
    let app = test_app(&mock_server).await;

    let body = multipart_body(
        &[("category", "shorts")],
        Some(("short.mp4", b"fake video bytes" as &[u8])),
    );
    let response = app.router.oneshot(upload_request(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .contains("YouTube upload failed"));
    assert_eq!(payload["details"]["error"]["code"], 403);
}

#[tokio::test]
async fn status_endpoint_reports_categories() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/status")
        .body(Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["status"], "operational");
    let categories = payload["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 7);
}
