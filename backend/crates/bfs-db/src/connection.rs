use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Open a bounded pool for a `sqlite:` URL, creating the file when missing.
pub async fn connect(
    url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> DbErrorResult<SqlitePool> {
    let mut options = SqliteConnectOptions::from_str(url)
        .map_err(|e| DbError::Initialization {
            message: format!("Invalid database URL: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    // In-memory databases are per-connection; WAL needs a real file.
    let in_memory = url.contains(":memory:") || url.contains("mode=memory");
    let max_connections = if in_memory {
        1
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        max_connections
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("Failed to open database: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Database pool ready ({} connections max)", max_connections);

    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Database migrations applied");
    Ok(())
}
