mod common;

use common::{
    TEST_PASSWORD, body_text, create_test_app_state, form_request, get, get_with_cookie,
    location, login_token, register_user, send, set_cookies, set_role,
};

use axum::http::StatusCode;
use bfs_core::Role;
use bfs_server::build_router;

#[tokio::test]
async fn given_visitor_when_opening_home_then_renders_public_page() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Buckalew Financial Services"));
    assert!(html.contains("Sign in"));
}

#[tokio::test]
async fn given_visitor_when_opening_dashboard_page_then_redirects_to_login() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/dashboard/settings")).await;

    // Then
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn given_similar_prefix_when_visiting_then_path_is_not_protected() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/dashboards")).await;

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unknown_api_path_when_requesting_then_returns_json_not_found() {
    // Given
    let app = build_router(create_test_app_state().await);

    // When
    let response = send(&app, get("/api/nothing-here")).await;

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("NOT_FOUND"));
}

#[tokio::test]
async fn given_signed_in_user_when_opening_dashboard_then_renders_summary() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "tara@example.com").await;
    let token = login_token(&state, "tara@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie("/dashboard", &format!("bfs_session={}", token)),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Welcome, Test User"));
    assert!(html.contains("Your profile is incomplete"));
}

#[tokio::test]
async fn given_user_role_when_opening_admin_page_then_redirects_to_unauthorized() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "uma@example.com").await;
    let token = login_token(&state, "uma@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie("/dashboard/admin", &format!("bfs_session={}", token)),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/unauthorized");
}

#[tokio::test]
async fn given_admin_role_when_opening_admin_page_then_renders() {
    // Given
    let state = create_test_app_state().await;
    let user = register_user(&state, "vic@example.com").await;
    let token = login_token(&state, "vic@example.com").await;
    set_role(&state, &user, Role::Admin).await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie("/dashboard/admin", &format!("bfs_session={}", token)),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Administration"));
}

#[tokio::test]
async fn given_agent_role_when_opening_clients_page_then_renders() {
    // Given
    let state = create_test_app_state().await;
    let user = register_user(&state, "wes@example.com").await;
    let token = login_token(&state, "wes@example.com").await;
    set_role(&state, &user, Role::Agent).await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie("/dashboard/clients", &format!("bfs_session={}", token)),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_only_refresh_cookie_when_opening_dashboard_then_renews_session() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "xena@example.com").await;
    let outcome = state
        .auth
        .login("xena@example.com", TEST_PASSWORD)
        .await
        .unwrap();
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie(
            "/dashboard",
            &format!("bfs_refresh={}", outcome.refresh_token),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        set_cookies(&response)
            .iter()
            .any(|c| c.starts_with("bfs_session="))
    );
}

#[tokio::test]
async fn given_valid_form_when_logging_in_then_redirects_to_dashboard_with_cookies() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "yuri@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        form_request(
            "/login",
            "email=yuri%40example.com&password=correct+horse+battery",
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    assert!(
        set_cookies(&response)
            .iter()
            .any(|c| c.starts_with("bfs_session="))
    );
}

#[tokio::test]
async fn given_wrong_password_form_when_logging_in_then_rerenders_with_error() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "zoe@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        form_request("/login", "email=zoe%40example.com&password=wrong-password"),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let html = body_text(response).await;
    assert!(html.contains("Invalid email or password"));
    assert!(html.contains("zoe@example.com"));
}

#[tokio::test]
async fn given_contact_form_when_submitting_then_stores_message() {
    // Given
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    // When
    let response = send(
        &app,
        form_request(
            "/contact",
            "name=Ada&email=ada%40example.com&message=Please+call+me",
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.contact.count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_invalid_contact_email_when_submitting_then_rerenders_with_error() {
    // Given
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    // When
    let response = send(
        &app,
        form_request("/contact", "name=Ada&email=not-an-email&message=Hello"),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.contact.count().await.unwrap(), 0);
}

#[tokio::test]
async fn given_mortgage_query_when_opening_calculators_then_renders_payment() {
    // Given
    let state = create_test_app_state().await;
    register_user(&state, "abe@example.com").await;
    let token = login_token(&state, "abe@example.com").await;
    let app = build_router(state);

    // When
    let response = send(
        &app,
        get_with_cookie(
            "/dashboard/calculators?calculator=mortgage&principal=300000&annual_rate=6&term_years=30",
            &format!("bfs_session={}", token),
        ),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("$1,798.65"));
}
