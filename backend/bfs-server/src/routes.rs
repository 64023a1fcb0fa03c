use crate::api::{
    auth::auth, calculators::calculators, catalog::catalog, dashboard::dashboard,
    settings::settings,
};
use crate::middleware::{rate_limit, request_log};
use crate::pages::{
    self, auth_pages, calculator_pages, catalog_pages, dashboard_pages, page_session, public,
};
use crate::{AppState, health, monitoring};

use axum::{
    Router,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let limits = state.limits;

    Router::new()
        .merge(api_routes(&state))
        .merge(page_routes(&state))
        // Operations endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .fallback(pages::not_found)
        .layer(from_fn_with_state(
            state.clone(),
            monitoring::capture_errors,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.timeout,
        ))
        .layer(GlobalConcurrencyLimitLayer::new(limits.max_concurrent))
        .layer(from_fn_with_state(state.clone(), request_log::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// JSON API under `/api`
fn api_routes(state: &AppState) -> Router<AppState> {
    let rate_limited = from_fn_with_state(state.clone(), rate_limit::limit_by_client);

    let credentials = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/refresh", post(auth::refresh))
        .route_layer(rate_limited);

    Router::new()
        .merge(credentials)
        .route("/api/auth/signout", post(auth::signout))
        .route("/api/auth/me", get(auth::me))
        // Dashboard
        .route("/api/financial-summary", get(dashboard::financial_summary))
        .route("/api/activities", get(dashboard::list_activities))
        // Settings
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/profile", put(settings::update_profile))
        // Catalog
        .route("/api/plans", get(catalog::list_plans))
        .route("/api/providers", get(catalog::list_providers))
        .route("/api/drug-prices", get(catalog::list_drug_prices))
        // Calculators
        .route("/api/calculators/mortgage", post(calculators::mortgage))
        .route("/api/calculators/investment", post(calculators::investment))
        .route(
            "/api/calculators/life-insurance",
            post(calculators::life_insurance),
        )
}

/// Server-rendered pages; every one passes through the route guard
fn page_routes(state: &AppState) -> Router<AppState> {
    let rate_limited = from_fn_with_state(state.clone(), rate_limit::limit_by_client);

    Router::new()
        // Marketing
        .route("/", get(public::home))
        .route("/services", get(public::services))
        .route("/about", get(public::about))
        .route(
            "/contact",
            get(public::contact).post(public::submit_contact),
        )
        .route("/unauthorized", get(public::unauthorized))
        // Sign-in forms
        .route(
            "/login",
            post(auth_pages::login)
                .route_layer(rate_limited.clone())
                .get(auth_pages::login_page),
        )
        .route(
            "/register",
            post(auth_pages::register)
                .route_layer(rate_limited)
                .get(auth_pages::register_page),
        )
        .route("/logout", post(auth_pages::logout))
        // Dashboard
        .route("/dashboard", get(dashboard_pages::dashboard))
        .route(
            "/dashboard/settings",
            get(dashboard_pages::settings).post(dashboard_pages::save_settings),
        )
        .route("/dashboard/profile", post(dashboard_pages::save_profile))
        .route(
            "/dashboard/calculators",
            get(calculator_pages::calculators),
        )
        .route("/dashboard/plans", get(catalog_pages::plans))
        .route("/dashboard/providers", get(catalog_pages::providers))
        .route("/dashboard/admin", get(dashboard_pages::admin))
        .route("/dashboard/clients", get(dashboard_pages::clients))
        .route("/admin", get(dashboard_pages::admin_redirect))
        .route_layer(from_fn_with_state(
            state.clone(),
            page_session::guard_pages,
        ))
}
