use crate::{Result as DbErrorResult, decode};

use bfs_core::Session;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    refresh_token: String,
    expires_at: i64,
    created_at: i64,
    revoked_at: Option<i64>,
}

impl TryFrom<SessionRow> for Session {
    type Error = crate::DbError;

    fn try_from(row: SessionRow) -> DbErrorResult<Self> {
        Ok(Session {
            id: decode::uuid(&row.id, "sessions.id")?,
            user_id: decode::uuid(&row.user_id, "sessions.user_id")?,
            refresh_token: row.refresh_token,
            expires_at: decode::timestamp(row.expires_at, "sessions.expires_at")?,
            created_at: decode::timestamp(row.created_at, "sessions.created_at")?,
            revoked_at: row
                .revoked_at
                .map(|secs| decode::timestamp(secs, "sessions.revoked_at"))
                .transpose()?,
        })
    }
}

const SELECT_SESSION: &str = r#"
    SELECT id, user_id, refresh_token, expires_at, created_at, revoked_at
    FROM sessions
"#;

#[derive(Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO sessions (id, user_id, refresh_token, expires_at, created_at, revoked_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(session.id.to_string())
        .bind(session.user_id.to_string())
        .bind(&session.refresh_token)
        .bind(session.expires_at.timestamp())
        .bind(session.created_at.timestamp())
        .bind(session.revoked_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Session>> {
        let row: Option<SessionRow> = sqlx::query_as(&format!("{SELECT_SESSION} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Session::try_from).transpose()
    }

    pub async fn find_by_refresh_token(&self, token: &str) -> DbErrorResult<Option<Session>> {
        let row: Option<SessionRow> =
            sqlx::query_as(&format!("{SELECT_SESSION} WHERE refresh_token = ?"))
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Session::try_from).transpose()
    }

    /// Mark the session revoked.
    ///
    /// Idempotent: unknown or already-revoked sessions are left untouched and
    /// reported as `false`.
    pub async fn revoke(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<bool> {
        let result =
            sqlx::query("UPDATE sessions SET revoked_at = ? WHERE id = ? AND revoked_at IS NULL")
                .bind(at.timestamp())
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
