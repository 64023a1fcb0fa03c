mod common;

use common::{
    add_investment, body_json, create_test_app_state, get, get_with_token,
    json_request_with_token, login_token, register_user, send,
};

use axum::http::StatusCode;
use bfs_server::build_router;
use serde_json::json;

#[tokio::test]
async fn given_investments_when_requesting_summary_then_aggregates_portfolio() {
    // Given
    let state = create_test_app_state().await;
    let user = register_user(&state, "kim@example.com").await;
    add_investment(&state, &user, "stocks", 1000.0, 1500.0).await;
    add_investment(&state, &user, "bonds", 1000.0, 500.0).await;
    let token = login_token(&state, "kim@example.com").await;
    let app = build_router(state);

    // When
    let response = send(&app, get_with_token("/api/financial-summary", &token)).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let summary = &body["summary"];
    assert_eq!(summary["total_invested"], 2000.0);
    assert_eq!(summary["current_value"], 2000.0);
    assert_eq!(summary["total_gain"], 0.0);
    assert_eq!(summary["holdings"], 2);
    assert_eq!(summary["allocation"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn given_no_investments_when_requesting_summary_then_returns_zeroes() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "lee@example.com").await;
    let token = login_token(&state, "lee@example.com").await;
    let app = build_router(state);

    // When
    let response = send(&app, get_with_token("/api/financial-summary", &token)).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["summary"]["total_invested"], 0.0);
    assert_eq!(body["summary"]["gain_percent"], 0.0);
}

#[tokio::test]
async fn given_no_session_when_requesting_summary_then_returns_unauthorized() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/financial-summary")).await;

    // Then
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_activity_when_listing_with_limit_then_returns_newest_first() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "max@example.com").await;
    let token = login_token(&state, "max@example.com").await;
    let app = build_router(state);

    // When
    let all = send(&app, get_with_token("/api/activities", &token)).await;
    let limited = send(&app, get_with_token("/api/activities?limit=1", &token)).await;

    // Then
    assert_eq!(all.status(), StatusCode::OK);
    let all = body_json(all).await;
    assert_eq!(all["activities"].as_array().unwrap().len(), 2);

    let limited = body_json(limited).await;
    let activities = limited["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["kind"], "login");
}

#[tokio::test]
async fn given_zero_limit_when_listing_activities_then_returns_bad_request() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "nia@example.com").await;
    let token = login_token(&state, "nia@example.com").await;
    let app = build_router(state);

    // When
    let response = send(&app, get_with_token("/api/activities?limit=0", &token)).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "limit");
}

#[tokio::test]
async fn given_new_user_when_reading_settings_then_returns_defaults() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "omar@example.com").await;
    let token = login_token(&state, "omar@example.com").await;
    let app = build_router(state);

    // When
    let response = send(&app, get_with_token("/api/settings", &token)).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["settings"],
        json!({"theme": "system", "currency": "usd", "notifications_enabled": true})
    );
}

#[tokio::test]
async fn given_saved_settings_when_reading_back_then_returns_replacement() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "pia@example.com").await;
    let token = login_token(&state, "pia@example.com").await;
    let app = build_router(state);

    // When
    let update = send(
        &app,
        json_request_with_token(
            "PUT",
            "/api/settings",
            &token,
            json!({"theme": "dark", "currency": "eur", "notifications_enabled": false}),
        ),
    )
    .await;
    let read = send(&app, get_with_token("/api/settings", &token)).await;

    // Then
    assert_eq!(update.status(), StatusCode::OK);
    let body = body_json(read).await;
    assert_eq!(body["settings"]["theme"], "dark");
    assert_eq!(body["settings"]["currency"], "eur");
    assert_eq!(body["settings"]["notifications_enabled"], false);
}

#[tokio::test]
async fn given_unknown_theme_when_saving_settings_then_returns_bad_request() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "quinn@example.com").await;
    let token = login_token(&state, "quinn@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        json_request_with_token("PUT", "/api/settings", &token, json!({"theme": "neon"})),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_name_and_phone_when_updating_profile_then_profile_is_complete() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "rae@example.com").await;
    let token = login_token(&state, "rae@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        json_request_with_token(
            "PUT",
            "/api/profile",
            &token,
            json!({"name": "Rae Jones", "phone": "555-0100"}),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "Rae Jones");
    assert_eq!(body["user"]["phone"], "555-0100");
    assert_eq!(body["user"]["profile_complete"], true);
}

#[tokio::test]
async fn given_blank_name_when_updating_profile_then_returns_field_error() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "sam@example.com").await;
    let token = login_token(&state, "sam@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        json_request_with_token("PUT", "/api/profile", &token, json!({"name": "   "})),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "name");
}
