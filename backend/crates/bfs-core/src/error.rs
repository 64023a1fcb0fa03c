use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid plan type: {value} {location}")]
    InvalidPlanType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid currency: {value} {location}")]
    InvalidCurrency {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named input field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field the error refers to, when there is one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidRole { .. } => Some("role"),
            Self::InvalidPlanType { .. } => Some("plan_type"),
            Self::InvalidTheme { .. } => Some("theme"),
            Self::InvalidCurrency { .. } => Some("currency"),
        }
    }

    /// Message without the source location, safe to show to a user
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Unknown role '{value}'"),
            Self::InvalidPlanType { value, .. } => format!("Unknown plan type '{value}'"),
            Self::InvalidTheme { value, .. } => format!("Unknown theme '{value}'"),
            Self::InvalidCurrency { value, .. } => format!("Unknown currency '{value}'"),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
