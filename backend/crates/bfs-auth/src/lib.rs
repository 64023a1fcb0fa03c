pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password_hasher;
pub mod rate_limit_config;
pub mod refresh_token;
pub mod request_rate_limiter;
pub mod route_guard;
pub mod session_context;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password_hasher::PasswordHasher;
pub use rate_limit_config::RateLimitConfig;
pub use refresh_token::generate_refresh_token;
pub use request_rate_limiter::RequestRateLimiter;
pub use route_guard::{DenyReason, GuardDecision, ProtectedRoute, RouteGuard};
pub use session_context::SessionContext;
pub use token_issuer::{IssuedToken, TokenIssuer};

#[cfg(test)]
mod tests;
