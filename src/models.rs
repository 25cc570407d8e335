//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted customer row.
///
/// `id` is caller-supplied; uniqueness is enforced by the table's
/// primary-key constraint, not by application logic.  Rows are created
/// and read only — there is no update or delete lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_with_flat_field_names() {
        let customer = Customer {
            id: 7,
            name: "Ada".into(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "name": "Ada" }));
    }
}
