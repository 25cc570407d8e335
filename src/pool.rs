//! Postgres connection acquisition.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::StoreError;

/// Type alias for the Postgres pool handed to every repository function.
pub type DbPool = PgPool;

/// Open a pool against the given `database_url`.
///
/// `max_connections` controls the pool ceiling.  The caller owns the
/// returned pool and is responsible for closing it; repository functions
/// only ever borrow it.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, StoreError> {
    info!(max_connections, "connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(StoreError::Connection)?;
    Ok(pool)
}
