//! Per-user settings and profile updates.

use crate::ApiResult;
use crate::services::auth_service::AuthService;

use bfs_core::{Activity, User, UserSettings, validation};
use bfs_db::{SettingsRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountService {
    settings: SettingsRepository,
    users: UserRepository,
    auth: AuthService,
}

impl AccountService {
    pub fn new(pool: SqlitePool, auth: AuthService) -> Self {
        Self {
            settings: SettingsRepository::new(pool.clone()),
            users: UserRepository::new(pool),
            auth,
        }
    }

    /// Saved settings, or the defaults when the user never saved any.
    pub async fn settings(&self, user_id: Uuid) -> ApiResult<UserSettings> {
        Ok(self.settings.find(user_id).await?.unwrap_or_default())
    }

    /// Replace the user's settings wholesale.
    pub async fn update_settings(
        &self,
        user_id: Uuid,
        settings: UserSettings,
    ) -> ApiResult<UserSettings> {
        self.settings.upsert(user_id, &settings).await?;
        self.auth
            .record(Activity::new(
                user_id,
                Activity::SETTINGS_UPDATED,
                "Preferences updated",
            ))
            .await;
        Ok(settings)
    }

    /// Update name and phone; the profile is complete once both are set.
    pub async fn update_profile(
        &self,
        mut user: User,
        name: &str,
        phone: Option<&str>,
    ) -> ApiResult<User> {
        validation::validate_name(name)?;
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());
        if let Some(phone) = phone {
            validation::validate_phone(phone)?;
        }

        user.update_profile(name.trim().to_string(), phone.map(str::to_string));
        self.users.update_profile(&user).await?;
        self.auth
            .record(Activity::new(
                user.id,
                Activity::PROFILE_UPDATED,
                "Profile updated",
            ))
            .await;

        Ok(user)
    }
}
