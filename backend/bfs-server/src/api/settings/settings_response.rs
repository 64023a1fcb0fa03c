use bfs_core::UserSettings;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: UserSettings,
}
