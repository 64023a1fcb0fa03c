use crate::{Result as DbErrorResult, decode};

use bfs_core::Investment;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct InvestmentRow {
    id: String,
    user_id: String,
    name: String,
    asset_class: String,
    amount_invested: f64,
    current_value: f64,
    updated_at: i64,
}

impl TryFrom<InvestmentRow> for Investment {
    type Error = crate::DbError;

    fn try_from(row: InvestmentRow) -> DbErrorResult<Self> {
        Ok(Investment {
            id: decode::uuid(&row.id, "investments.id")?,
            user_id: decode::uuid(&row.user_id, "investments.user_id")?,
            name: row.name,
            asset_class: row.asset_class,
            amount_invested: row.amount_invested,
            current_value: row.current_value,
            updated_at: decode::timestamp(row.updated_at, "investments.updated_at")?,
        })
    }
}

#[derive(Clone)]
pub struct InvestmentRepository {
    pool: SqlitePool,
}

impl InvestmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, investment: &Investment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO investments (
                    id, user_id, name, asset_class, amount_invested, current_value, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(investment.id.to_string())
        .bind(investment.user_id.to_string())
        .bind(&investment.name)
        .bind(&investment.asset_class)
        .bind(investment.amount_invested)
        .bind(investment.current_value)
        .bind(investment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Holdings in insertion order.
    pub async fn list_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Investment>> {
        let rows: Vec<InvestmentRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, name, asset_class, amount_invested, current_value, updated_at
                FROM investments
                WHERE user_id = ?
                ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Investment::try_from).collect()
    }
}
