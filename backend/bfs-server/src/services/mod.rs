pub mod account_service;
pub mod auth_service;
pub mod contact_service;
pub mod dashboard_service;
