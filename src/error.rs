// Pipeline error taxonomy for the upload endpoint.
// Every stage returns these explicitly; the handler propagates with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("No video provided")]
    NoVideoProvided,

    #[error("Download failed: {0}")]
    Download(String),

    #[error("{message}")]
    PlatformUpload {
        message: String,
        // Raw diagnostic body from the platform, passed through verbatim
        details: Option<Value>,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl UploadError {
    fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            UploadError::Unauthenticated => StatusCode::UNAUTHORIZED,
            UploadError::NoVideoProvided => StatusCode::BAD_REQUEST,
            UploadError::Download(_)
            | UploadError::PlatformUpload { .. }
            | UploadError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Upload error: {}", self);
        } else {
            tracing::warn!("Upload rejected: {}", self);
        }

        let mut body = json!({ "error": self.to_string() });
        if let UploadError::PlatformUpload {
            details: Some(details),
            ..
        } = &self
        {
            body["details"] = details.clone();
        }

        (status, Json(body)).into_response()
    }
}

impl From<std::io::Error> for UploadError {
    fn from(e: std::io::Error) -> Self {
        UploadError::Unexpected(format!("I/O error: {}", e))
    }
}
