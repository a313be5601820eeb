// ABOUTME: Authentication context for API requests
// ABOUTME: Reads the user id forwarded by the upstream auth proxy

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use vendorworld_core::USER_ID_HEADER;

/// Current authenticated user
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AppError::Unauthenticated)?;

        Ok(Self { id: id.to_string() })
    }
}
