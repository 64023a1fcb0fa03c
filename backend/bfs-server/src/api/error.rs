//! REST API error types
//!
//! Every failure leaves the API as `{"error": <message>, "code": <CODE>}`
//! (plus `field` for validation errors) with a matching status code.
//! Internal errors keep their detail in the log and the monitoring event;
//! clients only see a generic message.

use crate::monitoring::ErrorEvent;

use bfs_auth::AuthError;
use bfs_core::CoreError;
use bfs_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERIC_INTERNAL_MESSAGE: &str = "Something went wrong. Please try again later.";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing, expired or revoked session (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown email or wrong password; deliberately indistinguishable (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Authenticated but the role is insufficient (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limited: retry after {retry_after_secs}s {location}")]
    RateLimited {
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } | Self::InvalidCredentials { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the client
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthenticated { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. } => message.clone(),
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::RateLimited { .. } => "Too many requests. Please slow down.".to_string(),
            Self::Internal { .. } => GENERIC_INTERNAL_MESSAGE.to_string(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorBody {
            error: self.public_message(),
            code: self.code().to_string(),
            field: self.field().map(str::to_string),
        };

        let mut response = (status, Json(body)).into_response();

        match self {
            ApiError::Internal { message, location } => {
                response.extensions_mut().insert(ErrorEvent {
                    message,
                    location: location.to_string(),
                    method: None,
                    path: None,
                });
            }
            ApiError::RateLimited {
                retry_after_secs, ..
            } => {
                log::warn!("{}", self);
                if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
            }
            other => log::debug!("{}", other),
        }

        response
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.user_message(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert token and hashing errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::TokenExpired { .. } => ApiError::Unauthenticated {
                message: "Session expired".to_string(),
                location,
            },
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::RateLimited {
                retry_after_secs: window_secs,
                location,
            },
            e if e.is_credential_error() => ApiError::Unauthenticated {
                message: "Authentication required".to_string(),
                location,
            },
            e => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "Resource already exists".to_string(),
                location,
            },
            e => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
