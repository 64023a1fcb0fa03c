//! Dashboard REST API handlers

use crate::api::extractors::{auth_session::AuthSession, query_params::QueryParams};
use crate::{
    ActivityListQuery, ActivityListResponse, ApiResult, AppState, FinancialSummaryResponse,
};

use axum::{Json, extract::State};

/// GET /api/financial-summary
pub async fn financial_summary(
    State(state): State<AppState>,
    AuthSession(current): AuthSession,
) -> ApiResult<Json<FinancialSummaryResponse>> {
    let summary = state.dashboard.financial_summary(current.user.id).await?;

    Ok(Json(FinancialSummaryResponse { summary }))
}

/// GET /api/activities?limit=
///
/// Newest first; 20 entries by default, never more than 100
pub async fn list_activities(
    State(state): State<AppState>,
    AuthSession(current): AuthSession,
    QueryParams(query): QueryParams<ActivityListQuery>,
) -> ApiResult<Json<ActivityListResponse>> {
    let activities = state
        .dashboard
        .recent_activity(current.user.id, query.limit)
        .await?;

    Ok(Json(ActivityListResponse { activities }))
}
