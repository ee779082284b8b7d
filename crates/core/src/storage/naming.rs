//! Deterministic names for schema constraints.

/// Table holding customers.
pub const CUSTOMERS_TABLE: &str = "customers";
/// Table holding items.
pub const ITEMS_TABLE: &str = "items";
/// Table holding reviews.
pub const REVIEWS_TABLE: &str = "reviews";

/// Builds a foreign-key constraint name: `fk_<table>_<column>_<referenced_table>`.
///
/// ```
/// use reviewdesk_core::storage::foreign_key_name;
///
/// assert_eq!(
///     foreign_key_name("reviews", "customer_id", "customers"),
///     "fk_reviews_customer_id_customers"
/// );
/// ```
pub fn foreign_key_name(table: &str, column: &str, referenced_table: &str) -> String {
    format!("fk_{table}_{column}_{referenced_table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_foreign_keys() {
        assert_eq!(
            foreign_key_name(REVIEWS_TABLE, "customer_id", CUSTOMERS_TABLE),
            "fk_reviews_customer_id_customers"
        );
        assert_eq!(
            foreign_key_name(REVIEWS_TABLE, "item_id", ITEMS_TABLE),
            "fk_reviews_item_id_items"
        );
    }
}
