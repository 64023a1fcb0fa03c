#![allow(dead_code)]

//! Test infrastructure for bfs-server router tests

use bfs_server::{
    AppState, AppStateParts, AuthService, CookieSettings, ErrorReporter, Metrics, RequestLimits,
};

use bfs_auth::{JwtValidator, PasswordHasher, RateLimitConfig, RequestRateLimiter, TokenIssuer};
use bfs_core::{Investment, Role, User};
use bfs_db::{Cache, InvestmentRepository, UserRepository};

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-that-is-at-least-32-bytes-long";
pub const TEST_PASSWORD: &str = "correct horse battery";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = bfs_db::connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("Failed to create test database");

    bfs_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_rate_limit(RateLimitConfig {
        max_requests: 1000,
        window_secs: 60,
    })
    .await
}

pub async fn create_test_app_state_with_rate_limit(rate_limit: RateLimitConfig) -> AppState {
    let pool = create_test_pool().await;

    // Cheap hashing parameters keep the suite fast
    let hasher = PasswordHasher::new(1024, 1).expect("Failed to create hasher");
    let auth = AuthService::new(
        pool.clone(),
        hasher,
        TokenIssuer::with_hs256(TEST_SECRET, chrono::Duration::minutes(15)),
        JwtValidator::with_hs256(TEST_SECRET),
        chrono::Duration::days(7),
        Metrics::new(),
    );

    AppState::new(AppStateParts {
        pool,
        cache: Cache::disabled(),
        auth,
        rate_limiter: RequestRateLimiter::new(rate_limit),
        reporter: ErrorReporter::disabled(),
        prometheus: PrometheusBuilder::new().build_recorder().handle(),
        cookies: CookieSettings {
            secure: false,
            access_ttl_secs: 900,
            refresh_ttl_secs: 604_800,
        },
        limits: RequestLimits::default(),
        trust_proxy_headers: false,
    })
    .expect("Failed to build app state")
}

/// Register a user through the service layer and return it
pub async fn register_user(state: &AppState, email: &str) -> User {
    state
        .auth
        .register(email, TEST_PASSWORD, "Test User")
        .await
        .expect("Failed to register test user")
}

pub async fn set_role(state: &AppState, user: &User, role: Role) {
    UserRepository::new(state.pool.clone())
        .set_role(user.id, role)
        .await
        .expect("Failed to set role");
}

/// Log in and return the access token
pub async fn login_token(state: &AppState, email: &str) -> String {
    state
        .auth
        .login(email, TEST_PASSWORD)
        .await
        .expect("Failed to log in")
        .access
        .token
}

pub async fn add_investment(
    state: &AppState,
    user: &User,
    asset_class: &str,
    invested: f64,
    value: f64,
) {
    let investment = Investment::new(
        user.id,
        "Holding".to_string(),
        asset_class.to_string(),
        invested,
        value,
    );
    InvestmentRepository::new(state.pool.clone())
        .create(&investment)
        .await
        .expect("Failed to create investment");
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_with_token(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Attach the socket peer the server would see for this connection
pub fn from_peer(mut request: Request<Body>, peer: &str) -> Request<Body> {
    let addr: SocketAddr = peer.parse().expect("Invalid peer address");
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

pub fn with_header(mut request: Request<Body>, name: &'static str, value: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(name, value.parse().expect("Invalid header value"));
    request
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
