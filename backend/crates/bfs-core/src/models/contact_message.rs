use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Enquiry submitted through the public contact form
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}
