//! Customer table operations: ensure-schema, insert-one, list-all.

use sqlx::PgPool;
use tracing::debug;

use crate::{models::Customer, StoreError};

/// Idempotently create the `customers` table.
///
/// Safe to call any number of times; an existing table and its rows are
/// left untouched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    debug!("ensuring customers table exists");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INT NOT NULL,
            name TEXT NOT NULL,
            PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::Schema)?;
    Ok(())
}

/// Insert a single customer.
///
/// Parameters are bound positionally — never spliced into the statement —
/// so the driver handles quoting.  A duplicate `id` surfaces as
/// [`StoreError::DuplicateKey`].
pub async fn create_customer(pool: &PgPool, customer: &Customer) -> Result<(), StoreError> {
    debug!(id = customer.id, "inserting customer");
    sqlx::query("INSERT INTO customers (id, name) VALUES ($1, $2)")
        .bind(customer.id)
        .bind(&customer.name)
        .execute(pool)
        .await
        .map_err(StoreError::from_dml)?;
    Ok(())
}

/// Return every stored customer ordered by `id`.
///
/// Engine-natural row order is not guaranteed to be stable, so the order
/// is made explicit.  An empty table yields an empty vec, never an error.
pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, StoreError> {
    debug!("listing customers");
    let rows = sqlx::query_as::<_, Customer>("SELECT id, name FROM customers ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(StoreError::Connection)?;
    Ok(rows)
}
