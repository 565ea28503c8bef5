// Session credential extraction.
// The OAuth flow lives with an external collaborator; this service only
// reads the bearer token it hands out and never stores it.

use crate::error::UploadError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Opaque bearer token granting delegated access to the user's YouTube
/// account. Extraction rejects with 401 when the header is missing or not
/// in `Bearer <token>` form.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = UploadError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_str = parts
            .headers
            .get("Authorization")
            .and_then(|header| header.to_str().ok())
            .ok_or(UploadError::Unauthenticated)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(UploadError::Unauthenticated)?;

        if token.is_empty() {
            return Err(UploadError::Unauthenticated);
        }

        Ok(SessionToken(token.to_string()))
    }
}
