use async_trait::async_trait;

use crate::catalog::{
    CreateCustomerRequest, CreateItemRequest, CreateReviewRequest, Customer, EntityId, Item,
    Review,
};

use super::Result;

/// Repository for customer operations.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Gets a customer by its ID.
    async fn get_customer(&self, id: EntityId) -> Result<Option<Customer>>;

    /// Lists all customers ordered by ID.
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Inserts a customer and returns it with its assigned ID.
    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer>;

    /// Updates an existing customer.
    async fn update_customer(&self, customer: &Customer) -> Result<()>;

    /// Deletes a customer by its ID.
    ///
    /// Fails with `InvalidData` while any review references the customer.
    async fn delete_customer(&self, id: EntityId) -> Result<()>;
}

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID.
    async fn get_item(&self, id: EntityId) -> Result<Option<Item>>;

    /// Lists all items ordered by ID.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Inserts an item and returns it with its assigned ID.
    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item>;

    /// Updates an existing item.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its ID.
    ///
    /// Fails with `InvalidData` while any review references the item.
    async fn delete_item(&self, id: EntityId) -> Result<()>;
}

/// Repository for review operations.
///
/// Inserts and updates fail with `InvalidData` when `customer_id` or
/// `item_id` does not reference an existing row.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Gets a review by its ID.
    async fn get_review(&self, id: EntityId) -> Result<Option<Review>>;

    /// Lists all reviews ordered by ID.
    async fn list_reviews(&self) -> Result<Vec<Review>>;

    /// Lists the reviews written by a customer, ordered by ID.
    async fn list_reviews_for_customer(&self, customer_id: EntityId) -> Result<Vec<Review>>;

    /// Lists the reviews of an item, ordered by ID.
    async fn list_reviews_for_item(&self, item_id: EntityId) -> Result<Vec<Review>>;

    /// Inserts a review and returns it with its assigned ID.
    async fn create_review(&self, request: &CreateReviewRequest) -> Result<Review>;

    /// Updates an existing review.
    async fn update_review(&self, review: &Review) -> Result<()>;

    /// Deletes a review by its ID.
    async fn delete_review(&self, id: EntityId) -> Result<()>;
}

/// A storage backend providing every catalog repository.
pub trait CatalogRepository: CustomerRepository + ItemRepository + ReviewRepository {}

impl<T> CatalogRepository for T where T: CustomerRepository + ItemRepository + ReviewRepository {}
