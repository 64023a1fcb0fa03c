use crate::Result as DbErrorResult;

use bfs_core::ContactMessage;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: SqlitePool,
}

impl ContactMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &ContactMessage) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO contact_messages (id, name, email, message, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
