use crate::{Result as DbErrorResult, decode};

use bfs_core::{Currency, Theme, UserSettings};

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct SettingsRow {
    theme: String,
    currency: String,
    notifications_enabled: bool,
}

impl TryFrom<SettingsRow> for UserSettings {
    type Error = crate::DbError;

    fn try_from(row: SettingsRow) -> DbErrorResult<Self> {
        Ok(UserSettings {
            theme: decode::parsed::<Theme>(&row.theme, "user_settings.theme")?,
            currency: decode::parsed::<Currency>(&row.currency, "user_settings.currency")?,
            notifications_enabled: row.notifications_enabled,
        })
    }
}

#[derive(Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stored settings, or `None` when the user never saved any.
    pub async fn find(&self, user_id: Uuid) -> DbErrorResult<Option<UserSettings>> {
        let row: Option<SettingsRow> = sqlx::query_as(
            "SELECT theme, currency, notifications_enabled FROM user_settings WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserSettings::try_from).transpose()
    }

    /// Replace the user's settings wholesale.
    pub async fn upsert(&self, user_id: Uuid, settings: &UserSettings) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO user_settings (user_id, theme, currency, notifications_enabled, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT (user_id) DO UPDATE SET
                    theme = excluded.theme,
                    currency = excluded.currency,
                    notifications_enabled = excluded.notifications_enabled,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id.to_string())
        .bind(settings.theme.as_str())
        .bind(settings.currency.as_str())
        .bind(settings.notifications_enabled)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
