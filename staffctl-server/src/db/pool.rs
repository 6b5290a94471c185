//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The pool is the
//! only shared handle; its internal synchronization covers concurrent use.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Default maximum connections for the pool.
/// Kept low for a single-process service on a local file.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool for an existing database file.
///
/// The file is not created when missing; the schema is owned elsewhere.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("../db/employees.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(false)
        .busy_timeout(BUSY_TIMEOUT);

    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a single-connection in-memory pool.
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool
/// is pinned to one connection that never expires.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `options` - SQLite connect options (file, busy timeout, ...)
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
