pub mod auth_session;
pub mod client_ip;
pub mod json_body;
pub mod query_params;
