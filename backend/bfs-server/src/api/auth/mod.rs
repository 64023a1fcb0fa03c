pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod refresh_request;
pub mod register_request;
pub mod signout_response;
pub mod token_response;
pub mod user_response;
