//! Settings and profile REST API handlers

use crate::api::extractors::{auth_session::AuthSession, json_body::JsonBody};
use crate::{ApiResult, AppState, SettingsResponse, UpdateProfileRequest, UserResponse};

use bfs_core::UserSettings;

use axum::{Json, extract::State};

/// GET /api/settings
///
/// Defaults when the user never saved any
pub async fn get_settings(
    State(state): State<AppState>,
    AuthSession(current): AuthSession,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = state.account.settings(current.user.id).await?;

    Ok(Json(SettingsResponse { settings }))
}

/// PUT /api/settings
///
/// Replaces the stored settings; omitted fields fall back to defaults
pub async fn update_settings(
    State(state): State<AppState>,
    AuthSession(current): AuthSession,
    JsonBody(settings): JsonBody<UserSettings>,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = state
        .account
        .update_settings(current.user.id, settings)
        .await?;

    Ok(Json(SettingsResponse { settings }))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthSession(current): AuthSession,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .account
        .update_profile(current.user, &req.name, req.phone.as_deref())
        .await?;

    Ok(Json(UserResponse {
        user: user.public(),
    }))
}
