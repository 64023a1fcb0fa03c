pub mod cache;
pub mod connection;
pub mod error;
pub mod repositories;

mod decode;

pub use cache::Cache;
pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::activity_repository::ActivityRepository;
pub use repositories::contact_message_repository::ContactMessageRepository;
pub use repositories::investment_repository::InvestmentRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::settings_repository::SettingsRepository;
pub use repositories::user_repository::UserRepository;
