//! Axum extractor for authenticated API requests

use crate::api::cookies;
use crate::services::auth_service::CurrentUser;
use crate::{ApiError, AppState};

use axum::{extract::FromRequestParts, http::request::Parts};

/// The caller's user and session, resolved from `Authorization: Bearer` or
/// the `bfs_session` cookie.
///
/// Rejects with 401 when the token is missing, expired or tampered with,
/// when the session was revoked, or when the user no longer exists.
pub struct AuthSession(pub CurrentUser);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(current) = parts.extensions.get::<CurrentUser>() {
            return Ok(Self(current.clone()));
        }

        let token = cookies::access_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthenticated("Authentication required"))?;

        let current = state.auth.current_user(&token).await?;
        parts.extensions.insert(current.clone());

        Ok(Self(current))
    }
}
