pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod middleware;
pub mod monitoring;
pub mod pages;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth_response::AuthResponse, login_request::LoginRequest,
        refresh_request::RefreshRequest, register_request::RegisterRequest,
        signout_response::SignoutResponse, token_response::TokenResponse,
        user_response::UserResponse,
    },
    catalog::{
        drug_price_dto::DrugPriceDto, drug_price_list_response::DrugPriceListResponse,
        plan_dto::PlanDto, plan_list_query::PlanListQuery, plan_list_response::PlanListResponse,
        provider_dto::ProviderDto, provider_list_response::ProviderListResponse,
    },
    cookies::CookieSettings,
    dashboard::{
        activity_list_query::ActivityListQuery, activity_list_response::ActivityListResponse,
        financial_summary_response::FinancialSummaryResponse,
    },
    error::ApiError,
    error::ApiErrorBody,
    error::Result as ApiResult,
    settings::{settings_response::SettingsResponse, update_profile_request::UpdateProfileRequest},
};
pub use app_state::{AppState, AppStateParts, RequestLimits};
pub use crate::metrics::Metrics;
pub use crate::monitoring::ErrorReporter;
pub use services::auth_service::AuthService;

pub use crate::routes::build_router;
