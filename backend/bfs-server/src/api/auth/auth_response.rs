use bfs_core::PublicUser;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful login: the user plus both tokens (also set as cookies)
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub refresh_token: String,
}
