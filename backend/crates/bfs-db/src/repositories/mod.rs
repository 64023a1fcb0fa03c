pub mod activity_repository;
pub mod contact_message_repository;
pub mod investment_repository;
pub mod session_repository;
pub mod settings_repository;
pub mod user_repository;
