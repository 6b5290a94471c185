//! Database layer - the persistence gateway over SQLite
//!
//! # Design Principles
//!
//! - One `Database` handle owns the pool; handlers only call its operations
//! - Every operation is one statement or one transaction
//! - Writes run in their own short-lived transaction, rolled back on failure
//! - Errors are returned verbatim, never retried

pub mod employees;
pub mod jobs;
pub mod pool;

use std::path::Path;

use sqlx::SqlitePool;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Shared handle to the employee store.
///
/// Cheap to clone; all clones share one pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file at the given path. The file must exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let pool = create_pool(path).await?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(Self { pool })
    }

    /// Open an empty in-memory database (for testing)
    pub async fn open_in_memory() -> Result<Self, DbError> {
        let pool = create_memory_pool().await?;
        Ok(Self { pool })
    }

    /// Underlying pool, for schema setup and maintenance outside the service
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
