use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry in a user's account activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub description: String,
    pub amount: Option<f64>,
    pub occurred_at: DateTime<Utc>,
}

impl Activity {
    pub const ACCOUNT_CREATED: &'static str = "account_created";
    pub const LOGIN: &'static str = "login";
    pub const PROFILE_UPDATED: &'static str = "profile_updated";
    pub const SETTINGS_UPDATED: &'static str = "settings_updated";

    pub fn new(user_id: Uuid, kind: &str, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: kind.to_string(),
            description: description.into(),
            amount: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}
