//! SQLite repository implementation.
//!
//! Implements the repository traits from `reviewdesk_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use reviewdesk_core::catalog::{
    CreateCustomerRequest, CreateItemRequest, CreateReviewRequest, Customer, EntityId, Item,
    Review,
};
use reviewdesk_core::storage::{
    CustomerRepository, ItemRepository, RepositoryError, Result, ReviewRepository,
};

use super::conversions::{row_to_customer, row_to_item, row_to_review};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps the foreign-key failure of a parent delete to a "still referenced" error.
fn map_delete_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: EntityId,
) -> RepositoryError {
    match map_tokio_rusqlite_error_with_id(err, entity_type, id) {
        RepositoryError::InvalidData(_) => RepositoryError::still_referenced(entity_type, id),
        other => other,
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a query expected to return zero or one row.
    async fn query_optional<T, F>(
        &self,
        sql: &'static str,
        id: EntityId,
        entity_type: &'static str,
        convert: F,
    ) -> Result<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row([id], convert) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id))
    }

    /// Runs a query returning many rows, optionally bound to one ID parameter.
    async fn query_all<T, F>(
        &self,
        sql: &'static str,
        param: Option<EntityId>,
        entity_type: &'static str,
        convert: F,
    ) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: FnMut(&rusqlite::Row) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = match param {
                    Some(id) => stmt.query_map([id], convert),
                    None => stmt.query_map([], convert),
                }
                .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
    }

    /// Runs an UPDATE or DELETE that must touch exactly one row.
    async fn execute_one<P>(
        &self,
        sql: &'static str,
        params: P,
    ) -> std::result::Result<(), tokio_rusqlite::Error>
    where
        P: rusqlite::Params + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(sql, params).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
    }
}

// ============================================================================
// CustomerRepository implementation
// ============================================================================

#[async_trait]
impl CustomerRepository for SqliteRepository {
    async fn get_customer(&self, id: EntityId) -> Result<Option<Customer>> {
        self.query_optional(schema::SELECT_CUSTOMER_BY_ID, id, "Customer", row_to_customer)
            .await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.query_all(schema::SELECT_ALL_CUSTOMERS, None, "Customer", row_to_customer)
            .await
    }

    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        let request = request.clone();

        let customer = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_CUSTOMER, rusqlite::params![request.name])
                    .map_err(wrap_err)?;
                Ok(request.into_customer(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Customer"))?;

        tracing::debug!(id = customer.id, "Inserted customer");
        Ok(customer)
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        let id = customer.id;
        let name = customer.name.clone();

        self.execute_one(schema::UPDATE_CUSTOMER, (id, name))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Customer", id))
    }

    async fn delete_customer(&self, id: EntityId) -> Result<()> {
        self.execute_one(schema::DELETE_CUSTOMER, [id])
            .await
            .map_err(|e| map_delete_error(e, "Customer", id))
    }
}

// ============================================================================
// ItemRepository implementation
// ============================================================================

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn get_item(&self, id: EntityId) -> Result<Option<Item>> {
        self.query_optional(schema::SELECT_ITEM_BY_ID, id, "Item", row_to_item)
            .await
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.query_all(schema::SELECT_ALL_ITEMS, None, "Item", row_to_item)
            .await
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let request = request.clone();

        let item = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![request.name, request.price],
                )
                .map_err(wrap_err)?;
                Ok(request.into_item(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))?;

        tracing::debug!(id = item.id, "Inserted item");
        Ok(item)
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let name = item.name.clone();
        let price = item.price;

        self.execute_one(schema::UPDATE_ITEM, (id, name, price))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))
    }

    async fn delete_item(&self, id: EntityId) -> Result<()> {
        self.execute_one(schema::DELETE_ITEM, [id])
            .await
            .map_err(|e| map_delete_error(e, "Item", id))
    }
}

// ============================================================================
// ReviewRepository implementation
// ============================================================================

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn get_review(&self, id: EntityId) -> Result<Option<Review>> {
        self.query_optional(schema::SELECT_REVIEW_BY_ID, id, "Review", row_to_review)
            .await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.query_all(schema::SELECT_ALL_REVIEWS, None, "Review", row_to_review)
            .await
    }

    async fn list_reviews_for_customer(&self, customer_id: EntityId) -> Result<Vec<Review>> {
        self.query_all(
            schema::SELECT_REVIEWS_BY_CUSTOMER,
            Some(customer_id),
            "Review",
            row_to_review,
        )
        .await
    }

    async fn list_reviews_for_item(&self, item_id: EntityId) -> Result<Vec<Review>> {
        self.query_all(
            schema::SELECT_REVIEWS_BY_ITEM,
            Some(item_id),
            "Review",
            row_to_review,
        )
        .await
    }

    async fn create_review(&self, request: &CreateReviewRequest) -> Result<Review> {
        let request = request.clone();

        let review = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_REVIEW,
                    rusqlite::params![request.comment, request.customer_id, request.item_id],
                )
                .map_err(wrap_err)?;
                Ok(request.into_review(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Review"))?;

        tracing::debug!(
            id = review.id,
            customer_id = review.customer_id,
            item_id = review.item_id,
            "Inserted review"
        );
        Ok(review)
    }

    async fn update_review(&self, review: &Review) -> Result<()> {
        let id = review.id;
        let comment = review.comment.clone();
        let customer_id = review.customer_id;
        let item_id = review.item_id;

        self.execute_one(
            schema::UPDATE_REVIEW,
            (id, comment, customer_id, item_id),
        )
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", id))
    }

    async fn delete_review(&self, id: EntityId) -> Result<()> {
        self.execute_one(schema::DELETE_REVIEW, [id])
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", id))
    }
}
