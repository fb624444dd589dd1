//! Database connection pool and schema initialization
//!
//! Uses sqlx SqlitePool with explicit connection limits. The schema is
//! created on startup with CREATE TABLE IF NOT EXISTS, so running it
//! against an existing database is a no-op.

pub mod repos;

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Resolve the database file path from the environment.
///
/// Checked in order:
/// - `TODO_SQLITE_DB_PATH`: preferred explicit path
/// - `SQLITE_DB_PATH`: alternate name for generic tooling
/// - `todo.db` relative to the working directory when unset
pub fn default_db_path() -> PathBuf {
    std::env::var_os("TODO_SQLITE_DB_PATH")
        .or_else(|| std::env::var_os("SQLITE_DB_PATH"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("todo.db"))
}

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created.
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Ensure the todos table exists.
///
/// Idempotent; must complete before the server accepts traffic.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
