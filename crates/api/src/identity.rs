//! Acting-user identity extraction.
//!
//! Authentication is handled upstream: a gateway validates the session and
//! forwards the opaque user id in the `x-user-id` header. This service only
//! attributes writes (created_by, audit entries) to that id; it keeps no
//! sessions, tokens or user records of its own.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use comtrack_core::error::CoreError;

use crate::error::AppError;

/// Header carrying the opaque acting-user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The acting user for the current request.
///
/// Extracting this from a request without the header rejects with 401.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "missing {USER_ID_HEADER} header"
                )))
            })?;

        Ok(Self {
            user_id: user_id.to_string(),
        })
    }
}
