use crate::ApiResult;

use bfs_core::{ContactMessage, validation};
use bfs_db::ContactMessageRepository;

use log::info;
use sqlx::SqlitePool;

/// Stores messages sent through the public contact form
#[derive(Clone)]
pub struct ContactService {
    messages: ContactMessageRepository,
}

impl ContactService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            messages: ContactMessageRepository::new(pool),
        }
    }

    pub async fn submit(&self, name: &str, email: &str, message: &str) -> ApiResult<ContactMessage> {
        validation::validate_name(name)?;
        validation::validate_email(email)?;
        validation::validate_message(message)?;

        let message = ContactMessage::new(
            name.trim().to_string(),
            validation::normalize_email(email),
            message.trim().to_string(),
        );
        self.messages.create(&message).await?;
        info!("Contact message {} received", message.id);

        Ok(message)
    }

    pub async fn count(&self) -> ApiResult<i64> {
        Ok(self.messages.count().await?)
    }
}
