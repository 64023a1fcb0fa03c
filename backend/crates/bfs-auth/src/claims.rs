use crate::{AuthError, Result as AuthErrorResult};

use bfs_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Session the token was issued for
    pub sid: String,
    pub role: Role,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        Self::require_uuid("sub", &self.sub)?;
        Self::require_uuid("sid", &self.sid)?;
        Ok(())
    }

    #[track_caller]
    pub(crate) fn require_uuid(claim: &str, value: &str) -> AuthErrorResult<Uuid> {
        if value.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: claim.to_string(),
                message: format!("{claim} cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(value).map_err(|e| AuthError::InvalidClaim {
            claim: claim.to_string(),
            message: format!("{claim} is not a UUID: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
