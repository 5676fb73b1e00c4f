use async_trait::async_trait;
use quotebook_core::error::CoreError;
use quotebook_core::types::DbId;
use sqlx::{Sqlite, SqliteConnection};

use super::{Store, StoreError};
use crate::DbPool;

/// Store backed by a SQLite connection pool.
///
/// Every write is a single statement. Reference checks live inside the
/// statement (`WHERE EXISTS`), so a write never upgrades a read lock and
/// concurrent writers simply queue on SQLite's busy timeout.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pub(super) pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// Whether a row with `id` exists in `table`.
///
/// `table` is always a compile-time constant, never user input.
pub(super) async fn row_exists(
    conn: &mut SqliteConnection,
    table: &'static str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE id = ?");
    let count: i64 = sqlx::query_scalar::<Sqlite, i64>(&query)
        .bind(id)
        .fetch_one(conn)
        .await?;
    Ok(count > 0)
}

/// Turn a unique-constraint violation into a `Conflict`.
pub(super) fn conflict_on_unique(err: sqlx::Error, message: impl FnOnce() -> String) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Core(CoreError::Conflict(message()))
        }
        _ => StoreError::Database(err),
    }
}
