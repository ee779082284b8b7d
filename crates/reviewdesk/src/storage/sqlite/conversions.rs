//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use reviewdesk_core::catalog::{Customer, Item, Review};
use rusqlite::Row;

/// Convert a SQLite row to a Customer.
///
/// Expected columns: id, name
pub fn row_to_customer(row: &Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, price
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
    })
}

/// Convert a SQLite row to a Review.
///
/// Expected columns: id, comment, customer_id, item_id
pub fn row_to_review(row: &Row) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        comment: row.get(1)?,
        customer_id: row.get(2)?,
        item_id: row.get(3)?,
    })
}
