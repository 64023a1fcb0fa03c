use crate::ApiError;
use crate::monitoring::ErrorEvent;

use bfs_auth::AuthError;
use bfs_core::CoreError;
use bfs_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    // Given
    let error = ApiError::validation(Some("email"), "Email is required");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Email is required");
    assert_eq!(json["field"], "email");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_generic_message_and_event_attached() {
    // Given
    let error = ApiError::internal("database is on fire");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let event = response.extensions().get::<ErrorEvent>().cloned().unwrap();
    assert_eq!(event.message, "database is on fire");

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("fire"));
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn given_rate_limited_error_when_rendered_then_retry_after_header_set() {
    // Given
    let error = ApiError::RateLimited {
        retry_after_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[header::RETRY_AFTER], "60");
}

#[test]
fn given_invalid_credentials_when_public_message_then_does_not_reveal_which_part_failed() {
    // Given
    let error = ApiError::invalid_credentials();

    // When
    let message = error.public_message();

    // Then
    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message, "Invalid email or password");
}

#[test]
fn given_core_validation_error_when_converted_then_keeps_field_and_message() {
    // Given
    let core = CoreError::validation("principal", "principal must be greater than zero");

    // When
    let error = ApiError::from(core);

    // Then
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.field(), Some("principal"));
    assert_eq!(error.public_message(), "principal must be greater than zero");
}

#[test]
fn given_expired_token_when_converted_then_unauthenticated() {
    // Given
    let auth = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let error = ApiError::from(auth);

    // Then
    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error.code(), "UNAUTHENTICATED");
}

#[test]
fn given_password_hash_failure_when_converted_then_internal() {
    // Given
    let auth = AuthError::PasswordHash {
        message: "bad params".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let error = ApiError::from(auth);

    // Then
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_unique_violation_when_converted_then_conflict() {
    // Given
    let db = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: users.email".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let error = ApiError::from(db);

    // Then
    assert_eq!(error.status(), StatusCode::CONFLICT);
    assert_eq!(error.code(), "CONFLICT");
}
