use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub asset_class: String,
    pub amount_invested: f64,
    pub current_value: f64,
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    pub fn new(
        user_id: Uuid,
        name: String,
        asset_class: String,
        amount_invested: f64,
        current_value: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            asset_class,
            amount_invested,
            current_value,
            updated_at: Utc::now(),
        }
    }

    pub fn gain(&self) -> f64 {
        self.current_value - self.amount_invested
    }
}
