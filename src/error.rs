//! Typed error taxonomy for the customer store.
//!
//! The store performs no local recovery or retry; every driver failure is
//! classified into one of the variants below and surfaced to the caller.

use thiserror::Error;

/// SQLSTATE code for a unique/primary-key violation.
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE class shared by all integrity-constraint violations.
const INTEGRITY_CLASS: &str = "23";

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport or connectivity failure reported by the driver.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The engine rejected a DDL statement.
    #[error("schema statement rejected: {0}")]
    Schema(#[source] sqlx::Error),

    /// An insert hit the primary-key constraint on `id`.
    #[error("duplicate customer id: {detail}")]
    DuplicateKey { detail: String },

    /// Any other integrity-constraint violation (e.g. a null name).
    #[error("constraint violation: {detail}")]
    Constraint { detail: String },
}

impl StoreError {
    /// Classify a driver error raised by a DML statement.
    ///
    /// Integrity violations carry a SQLSTATE in class 23; anything without
    /// a database-level code is a connection-level failure.
    pub fn from_dml(err: sqlx::Error) -> Self {
        let code = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|c| c.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => Self::DuplicateKey {
                detail: err.to_string(),
            },
            Some(c) if c.starts_with(INTEGRITY_CLASS) => Self::Constraint {
                detail: err.to_string(),
            },
            _ => Self::Connection(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_errors_without_a_sqlstate_are_connection_failures() {
        let err = StoreError::from_dml(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn variants_render_their_taxonomy_in_display() {
        let dup = StoreError::DuplicateKey {
            detail: "customers_pkey".into(),
        };
        assert_eq!(dup.to_string(), "duplicate customer id: customers_pkey");

        let constraint = StoreError::Constraint {
            detail: "null value in column \"name\"".into(),
        };
        assert!(constraint.to_string().starts_with("constraint violation:"));
    }
}
