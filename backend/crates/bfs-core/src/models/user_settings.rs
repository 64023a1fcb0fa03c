use crate::{Currency, Theme};

use serde::{Deserialize, Serialize};

/// Per-user display preferences. Updates replace the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_notifications")]
    pub notifications_enabled: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency: Currency::default(),
            notifications_enabled: default_notifications(),
        }
    }
}
