use crate::ApiError;
use crate::monitoring::ErrorEvent;

use axum::{http::StatusCode, response::Response};

/// A failed form submission, ready to be shown next to the form.
///
/// Internal errors keep their [`ErrorEvent`] so the re-rendered page is
/// reported like any API failure.
pub struct FormFailure {
    pub status: StatusCode,
    pub message: String,
    event: Option<ErrorEvent>,
}

impl FormFailure {
    pub fn attach(self, mut response: Response) -> Response {
        if let Some(event) = self.event {
            response.extensions_mut().insert(event);
        }
        response
    }
}

impl From<ApiError> for FormFailure {
    fn from(error: ApiError) -> Self {
        let status = error.status();
        let message = error.public_message();
        let event = match error {
            ApiError::Internal { message, location } => Some(ErrorEvent {
                message,
                location: location.to_string(),
                method: None,
                path: None,
            }),
            _ => None,
        };

        Self {
            status,
            message,
            event,
        }
    }
}
