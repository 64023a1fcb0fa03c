//! Authentication REST API handlers

use crate::api::cookies::{self, REFRESH_COOKIE};
use crate::api::extractors::{auth_session::AuthSession, json_body::JsonBody};
use crate::{
    ApiError, ApiResult, AppState, AuthResponse, LoginRequest, RefreshRequest, RegisterRequest,
    SignoutResponse, TokenResponse, UserResponse,
};

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};

/// POST /api/auth/login
///
/// Sets the session cookies and returns both tokens
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<(HeaderMap, Json<AuthResponse>)> {
    let outcome = state.auth.login(&req.email, &req.password).await?;

    let headers = state
        .cookies
        .login_headers(&outcome.access.token, &outcome.refresh_token);

    Ok((
        headers,
        Json(AuthResponse {
            user: outcome.user.public(),
            access_token: outcome.access.token,
            expires_at: outcome.access.expires_at,
            refresh_token: outcome.refresh_token,
        }),
    ))
}

/// POST /api/auth/register
///
/// Creates the account without signing in
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth
        .register(&req.email, &req.password, &req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: user.public(),
        }),
    ))
}

/// POST /api/auth/signout
///
/// Revokes whatever session the request carries and clears the cookies.
/// Succeeds without a session too.
pub async fn signout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<(HeaderMap, Json<SignoutResponse>)> {
    if let Some(session_id) =
        cookies::access_token(&headers).and_then(|token| state.auth.session_id_of(&token))
    {
        state.auth.logout(session_id).await?;
    }

    if let Some(refresh_token) = cookies::read_cookie(&headers, REFRESH_COOKIE) {
        state.auth.logout_by_refresh_token(&refresh_token).await?;
    }

    Ok((
        state.cookies.logout_headers(),
        Json(SignoutResponse { success: true }),
    ))
}

/// POST /api/auth/refresh
///
/// Accepts `{"refresh_token": ...}` or falls back to the refresh cookie
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(HeaderMap, Json<TokenResponse>)> {
    let req: RefreshRequest = if body.iter().all(u8::is_ascii_whitespace) {
        RefreshRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::validation(None, format!("Invalid request body: {e}")))?
    };

    let refresh_token = req
        .refresh_token
        .filter(|token| !token.trim().is_empty())
        .or_else(|| cookies::read_cookie(&headers, REFRESH_COOKIE))
        .ok_or_else(|| ApiError::unauthenticated("Refresh token required"))?;

    let outcome = state.auth.refresh(&refresh_token).await?;

    Ok((
        cookies::headers_with_cookies([state.cookies.session_cookie(&outcome.access.token)]),
        Json(TokenResponse {
            access_token: outcome.access.token,
            expires_at: outcome.access.expires_at,
        }),
    ))
}

/// GET /api/auth/me
pub async fn me(AuthSession(current): AuthSession) -> Json<UserResponse> {
    Json(UserResponse {
        user: current.user.public(),
    })
}
