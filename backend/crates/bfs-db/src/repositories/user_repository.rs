//! User accounts.
//!
//! Emails are stored normalized (trimmed, lower-cased) by the caller; the
//! UNIQUE constraint on `users.email` is the source of truth for duplicate
//! registrations and surfaces as `DbError::UniqueViolation`.

use crate::{Result as DbErrorResult, decode};

use bfs_core::{Role, User};

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    phone: Option<String>,
    password_hash: String,
    role: String,
    profile_complete: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = crate::DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: decode::uuid(&row.id, "users.id")?,
            email: row.email,
            name: row.name,
            phone: row.phone,
            password_hash: row.password_hash,
            role: decode::parsed::<Role>(&row.role, "users.role")?,
            profile_complete: row.profile_complete,
            created_at: decode::timestamp(row.created_at, "users.created_at")?,
            updated_at: decode::timestamp(row.updated_at, "users.updated_at")?,
        })
    }
}

const SELECT_USER: &str = r#"
    SELECT id, email, name, phone, password_hash, role, profile_complete,
        created_at, updated_at
    FROM users
"#;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, name, phone, password_hash, role, profile_complete,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.profile_complete)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    /// Persist name, phone and the derived profile-complete flag.
    pub async fn update_profile(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, phone = ?, profile_complete = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.phone)
        .bind(user.profile_complete)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_role(&self, id: Uuid, role: Role) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE id = ?")
            .bind(role.as_str())
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
