use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies access tokens signed with the shared auth secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.decode_with(token, &self.validation, Location::caller())
    }

    /// Verify signature and claims but accept an expired token.
    ///
    /// Only for revoking the session behind a stale token on sign-out.
    #[track_caller]
    pub fn validate_ignoring_expiry(&self, token: &str) -> AuthErrorResult<Claims> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        self.decode_with(token, &validation, Location::caller())
    }

    fn decode_with(
        &self,
        token: &str,
        validation: &Validation,
        caller: &'static Location<'static>,
    ) -> AuthErrorResult<Claims> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingCredentials {
                location: ErrorLocation::from(caller),
            });
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(caller),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(caller),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization` header value
    #[track_caller]
    pub fn bearer_token(header_value: &str) -> AuthErrorResult<&str> {
        header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
