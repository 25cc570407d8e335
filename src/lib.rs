//! `customer-store` — pure persistence layer for the `customers` table.
//!
//! Provides a connection pool helper, a typed row struct, and repository
//! functions for the single table in scope.  No business logic lives here:
//! the caller owns the pool, passes it into every operation, and decides
//! how to react to failures.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::StoreError;
pub use models::Customer;
pub use pool::DbPool;
