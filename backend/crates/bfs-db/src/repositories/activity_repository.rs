use crate::{Result as DbErrorResult, decode};

use bfs_core::Activity;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ActivityRow {
    id: String,
    user_id: String,
    kind: String,
    description: String,
    amount: Option<f64>,
    occurred_at: i64,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = crate::DbError;

    fn try_from(row: ActivityRow) -> DbErrorResult<Self> {
        Ok(Activity {
            id: decode::uuid(&row.id, "activities.id")?,
            user_id: decode::uuid(&row.user_id, "activities.user_id")?,
            kind: row.kind,
            description: row.description,
            amount: row.amount,
            occurred_at: decode::timestamp(row.occurred_at, "activities.occurred_at")?,
        })
    }
}

#[derive(Clone)]
pub struct ActivityRepository {
    pool: SqlitePool,
}

impl ActivityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, activity: &Activity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO activities (id, user_id, kind, description, amount, occurred_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(activity.id.to_string())
        .bind(activity.user_id.to_string())
        .bind(&activity.kind)
        .bind(&activity.description)
        .bind(activity.amount)
        .bind(activity.occurred_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest first; ties within the same second fall back to insertion order.
    pub async fn list_recent(&self, user_id: Uuid, limit: u32) -> DbErrorResult<Vec<Activity>> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, kind, description, amount, occurred_at
                FROM activities
                WHERE user_id = ?
                ORDER BY occurred_at DESC, rowid DESC
                LIMIT ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Activity::try_from).collect()
    }
}
