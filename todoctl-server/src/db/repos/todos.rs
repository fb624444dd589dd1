//! Todo repository
//!
//! One table, parameterized statements only. The row type mirrors the
//! stored columns; conversion to the response shape is a pure mapping
//! kept separate from I/O.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::models::{utc_now_iso, TodoTitle};

/// Raw todo row as stored in SQLite
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub completed: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Todo record in response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            completed: row.completed != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("todo {id} not found")]
    NotFound { id: i64 },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new todo and return the persisted record.
    ///
    /// Both timestamps are set to the same instant; `id` is assigned by
    /// SQLite (AUTOINCREMENT, never reused after deletion).
    pub async fn create(&self, title: TodoTitle, completed: bool) -> Result<Todo, DbError> {
        let now = utc_now_iso();

        let result = sqlx::query(
            "INSERT INTO todos (title, completed, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(title.as_str())
        .bind(completed)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await?;

        self.fetch(result.last_insert_rowid()).await
    }

    /// List all todos ordered by id descending (newest first).
    pub async fn list(&self) -> Result<Vec<Todo>, DbError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            "SELECT id, title, completed, created_at, updated_at FROM todos ORDER BY id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: i64) -> Result<Todo, DbError> {
        self.fetch(id).await
    }

    /// Full replace of title and completed state.
    ///
    /// Verifies the row exists first; `created_at` is never touched.
    pub async fn update(&self, id: i64, title: TodoTitle, completed: bool) -> Result<Todo, DbError> {
        self.fetch(id).await?;

        let now = utc_now_iso();
        sqlx::query("UPDATE todos SET title = ?, completed = ?, updated_at = ? WHERE id = ?")
            .bind(title.as_str())
            .bind(completed)
            .bind(&now)
            .bind(id)
            .execute(self.pool)
            .await?;

        self.fetch(id).await
    }

    /// Hard delete. Zero rows affected means the id did not exist.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(())
    }

    /// Flip the completed flag and refresh `updated_at`.
    ///
    /// Read-then-write without a transaction: concurrent toggles on the
    /// same id are last-write-wins.
    pub async fn toggle(&self, id: i64) -> Result<Todo, DbError> {
        let current = self.fetch(id).await?;

        let now = utc_now_iso();
        sqlx::query("UPDATE todos SET completed = ?, updated_at = ? WHERE id = ?")
            .bind(!current.completed)
            .bind(&now)
            .bind(id)
            .execute(self.pool)
            .await?;

        self.fetch(id).await
    }

    async fn fetch(&self, id: i64) -> Result<Todo, DbError> {
        let row: Option<TodoRow> = sqlx::query_as(
            "SELECT id, title, completed, created_at, updated_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Todo::from).ok_or(DbError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        crate::db::init_schema(&pool).await.expect("schema init");
        pool
    }

    fn title(s: &str) -> TodoTitle {
        TodoTitle::new(s).unwrap()
    }

    #[test]
    fn row_mapping_is_pure() {
        let row = TodoRow {
            id: 7,
            title: "Buy milk".into(),
            completed: 1,
            created_at: Some("2024-01-01T00:00:00Z".into()),
            updated_at: Some("2024-01-02T00:00:00Z".into()),
        };
        let todo = Todo::from(row);
        assert_eq!(todo.id, 7);
        assert!(todo.completed);

        let row = TodoRow {
            id: 8,
            title: "Walk".into(),
            completed: 0,
            created_at: None,
            updated_at: None,
        };
        assert!(!Todo::from(row).completed);
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let todo = repo.create(title("Buy milk"), false).await.unwrap();
        assert!(todo.id >= 1);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
        assert!(todo.created_at.is_some());
    }

    #[tokio::test]
    async fn get_returns_last_written_fields() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(title("Original"), false).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = repo
            .update(created.id, title("Replaced"), true)
            .await
            .unwrap();
        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(fetched.title, "Replaced");
        assert!(fetched.completed);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn list_orders_by_id_descending() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        for name in ["first", "second", "third"] {
            repo.create(title(name), false).await.unwrap();
        }

        let todos = repo.list().await.unwrap();
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn list_empty_store_is_empty() {
        let pool = test_pool().await;
        let todos = TodoRepo::new(&pool).list().await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let err = repo.update(9999, title("x"), true).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 9999 }));

        // The failed update must not create a row
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggle_is_its_own_inverse() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(title("Buy milk"), false).await.unwrap();

        let once = repo.toggle(created.id).await.unwrap();
        assert!(once.completed);
        assert!(once.updated_at >= created.updated_at);

        let twice = repo.toggle(created.id).await.unwrap();
        assert!(!twice.completed);
        assert!(twice.updated_at >= once.updated_at);
    }

    #[tokio::test]
    async fn toggle_missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = TodoRepo::new(&pool).toggle(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(title("Buy milk"), false).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        // Deleting twice yields not-found the second time
        assert!(matches!(
            repo.delete(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let first = repo.create(title("one"), false).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(title("two"), false).await.unwrap();
        assert!(second.id > first.id);
    }
}
