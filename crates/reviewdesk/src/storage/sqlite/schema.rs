//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.
//!
//! Foreign-key constraint names must match
//! `reviewdesk_core::storage::foreign_key_name`.

/// SQL statement to create all tables.
///
/// `foreign_keys` is a per-connection setting, so it is switched on here.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Customers table
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL
);

-- Reviews table
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    comment TEXT NOT NULL,
    customer_id INTEGER NOT NULL,
    item_id INTEGER NOT NULL,
    CONSTRAINT fk_reviews_customer_id_customers
        FOREIGN KEY (customer_id) REFERENCES customers(id),
    CONSTRAINT fk_reviews_item_id_items
        FOREIGN KEY (item_id) REFERENCES items(id)
);

-- Indexes for relationship traversal
CREATE INDEX IF NOT EXISTS idx_reviews_customer_id ON reviews(customer_id);
CREATE INDEX IF NOT EXISTS idx_reviews_item_id ON reviews(item_id);
"#;

// Customer queries
pub const INSERT_CUSTOMER: &str = r#"
INSERT INTO customers (name)
VALUES (?1)
"#;

pub const SELECT_CUSTOMER_BY_ID: &str = r#"
SELECT id, name
FROM customers
WHERE id = ?1
"#;

pub const SELECT_ALL_CUSTOMERS: &str = r#"
SELECT id, name
FROM customers
ORDER BY id ASC
"#;

pub const UPDATE_CUSTOMER: &str = r#"
UPDATE customers
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_CUSTOMER: &str = r#"
DELETE FROM customers
WHERE id = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, price)
VALUES (?1, ?2)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, price
FROM items
WHERE id = ?1
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name, price
FROM items
ORDER BY id ASC
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, price = ?3
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

// Review queries
pub const INSERT_REVIEW: &str = r#"
INSERT INTO reviews (comment, customer_id, item_id)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_REVIEW_BY_ID: &str = r#"
SELECT id, comment, customer_id, item_id
FROM reviews
WHERE id = ?1
"#;

pub const SELECT_ALL_REVIEWS: &str = r#"
SELECT id, comment, customer_id, item_id
FROM reviews
ORDER BY id ASC
"#;

pub const SELECT_REVIEWS_BY_CUSTOMER: &str = r#"
SELECT id, comment, customer_id, item_id
FROM reviews
WHERE customer_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_REVIEWS_BY_ITEM: &str = r#"
SELECT id, comment, customer_id, item_id
FROM reviews
WHERE item_id = ?1
ORDER BY id ASC
"#;

pub const UPDATE_REVIEW: &str = r#"
UPDATE reviews
SET comment = ?2, customer_id = ?3, item_id = ?4
WHERE id = ?1
"#;

pub const DELETE_REVIEW: &str = r#"
DELETE FROM reviews
WHERE id = ?1
"#;
