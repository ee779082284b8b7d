//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use reviewdesk_core::catalog::{
    CreateCustomerRequest, CreateItemRequest, CreateReviewRequest, Customer, EntityId, Item,
    Review,
};
use reviewdesk_core::storage::{
    CustomerRepository, ItemRepository, RepositoryError, Result, ReviewRepository,
};

/// Tables and id counters, guarded together.
#[derive(Debug)]
struct Tables {
    customers: BTreeMap<EntityId, Customer>,
    items: BTreeMap<EntityId, Item>,
    reviews: BTreeMap<EntityId, Review>,
    next_customer_id: EntityId,
    next_item_id: EntityId,
    next_review_id: EntityId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            customers: BTreeMap::new(),
            items: BTreeMap::new(),
            reviews: BTreeMap::new(),
            next_customer_id: 1,
            next_item_id: 1,
            next_review_id: 1,
        }
    }
}

impl Tables {
    /// Fails unless both ends of a review exist.
    fn check_review_links(&self, customer_id: EntityId, item_id: EntityId) -> Result<()> {
        if !self.customers.contains_key(&customer_id) {
            return Err(RepositoryError::InvalidData(format!(
                "Review references missing Customer {customer_id}"
            )));
        }
        if !self.items.contains_key(&item_id) {
            return Err(RepositoryError::InvalidData(format!(
                "Review references missing Item {item_id}"
            )));
        }
        Ok(())
    }
}

/// In-memory storage backend for tests and the `inmemory` feature.
///
/// Ids are assigned from per-table counters starting at 1 and are never
/// reused. Reviews must point at existing rows, and customers or items
/// cannot be deleted while a review still references them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn get_customer(&self, id: EntityId) -> Result<Option<Customer>> {
        let tables = self.tables.read().await;
        Ok(tables.customers.get(&id).cloned())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let tables = self.tables.read().await;
        Ok(tables.customers.values().cloned().collect())
    }

    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        let mut tables = self.tables.write().await;
        let id = tables.next_customer_id;
        tables.next_customer_id += 1;

        let customer = request.clone().into_customer(id);
        tables.customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("Customer", customer.id)),
        }
    }

    async fn delete_customer(&self, id: EntityId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.customers.contains_key(&id) {
            return Err(RepositoryError::not_found("Customer", id));
        }
        if tables.reviews.values().any(|r| r.customer_id == id) {
            return Err(RepositoryError::still_referenced("Customer", id));
        }
        tables.customers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: EntityId) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.get(&id).cloned())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.values().cloned().collect())
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let mut tables = self.tables.write().await;
        let id = tables.next_item_id;
        tables.next_item_id += 1;

        let item = request.clone().into_item(id);
        tables.items.insert(id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("Item", item.id)),
        }
    }

    async fn delete_item(&self, id: EntityId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.items.contains_key(&id) {
            return Err(RepositoryError::not_found("Item", id));
        }
        if tables.reviews.values().any(|r| r.item_id == id) {
            return Err(RepositoryError::still_referenced("Item", id));
        }
        tables.items.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn get_review(&self, id: EntityId) -> Result<Option<Review>> {
        let tables = self.tables.read().await;
        Ok(tables.reviews.get(&id).cloned())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables.reviews.values().cloned().collect())
    }

    async fn list_reviews_for_customer(&self, customer_id: EntityId) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn list_reviews_for_item(&self, item_id: EntityId) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn create_review(&self, request: &CreateReviewRequest) -> Result<Review> {
        let mut tables = self.tables.write().await;
        tables.check_review_links(request.customer_id, request.item_id)?;

        let id = tables.next_review_id;
        tables.next_review_id += 1;

        let review = request.clone().into_review(id);
        tables.reviews.insert(id, review.clone());
        Ok(review)
    }

    async fn update_review(&self, review: &Review) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.reviews.contains_key(&review.id) {
            return Err(RepositoryError::not_found("Review", review.id));
        }
        tables.check_review_links(review.customer_id, review.item_id)?;
        tables.reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn delete_review(&self, id: EntityId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.reviews.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Review", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryRepository, Customer, Item, Review) {
        let repo = InMemoryRepository::new();
        let alice = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();
        let widget = repo
            .create_item(&CreateItemRequest::new("Widget", 9.99))
            .await
            .unwrap();
        let review = repo
            .create_review(&CreateReviewRequest::new("Great", alice.id, widget.id))
            .await
            .unwrap();
        (repo, alice, widget, review)
    }

    // ==================== Customer CRUD Tests ====================

    #[tokio::test]
    async fn test_customer_create_and_get() {
        let repo = InMemoryRepository::new();

        let customer = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();

        assert_eq!(customer, Customer::new(1, "Alice"));
        assert_eq!(repo.get_customer(1).await.unwrap(), Some(customer));
    }

    #[tokio::test]
    async fn test_customer_get_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_customer(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_customer_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.update_customer(&Customer::new(4, "Ghost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_customer_delete_while_referenced() {
        let (repo, alice, _, _) = seeded().await;

        let result = repo.delete_customer(alice.id).await;

        assert_eq!(
            result,
            Err(RepositoryError::still_referenced("Customer", alice.id))
        );
    }

    #[tokio::test]
    async fn test_customer_ids_not_reused() {
        let repo = InMemoryRepository::new();
        let first = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();
        repo.delete_customer(first.id).await.unwrap();

        let second = repo
            .create_customer(&CreateCustomerRequest::new("Bob"))
            .await
            .unwrap();

        assert_eq!(second.id, 2);
    }

    // ==================== Item CRUD Tests ====================

    #[tokio::test]
    async fn test_item_update() {
        let (repo, _, mut widget, _) = seeded().await;

        widget.name = "Gadget".to_string();
        widget.price = 1.5;
        repo.update_item(&widget).await.unwrap();

        let retrieved = repo.get_item(widget.id).await.unwrap().unwrap();
        assert_eq!(retrieved, Item::new(widget.id, "Gadget", 1.5));
    }

    #[tokio::test]
    async fn test_item_delete_while_referenced() {
        let (repo, _, widget, review) = seeded().await;

        assert!(matches!(
            repo.delete_item(widget.id).await,
            Err(RepositoryError::InvalidData(_))
        ));

        repo.delete_review(review.id).await.unwrap();
        repo.delete_item(widget.id).await.unwrap();
        assert!(repo.list_items().await.unwrap().is_empty());
    }

    // ==================== Review CRUD Tests ====================

    #[tokio::test]
    async fn test_review_requires_existing_links() {
        let (repo, alice, widget, _) = seeded().await;

        let missing_customer = repo
            .create_review(&CreateReviewRequest::new("x", 99, widget.id))
            .await;
        let missing_item = repo
            .create_review(&CreateReviewRequest::new("x", alice.id, 99))
            .await;

        assert!(matches!(
            missing_customer,
            Err(RepositoryError::InvalidData(_))
        ));
        assert!(matches!(missing_item, Err(RepositoryError::InvalidData(_))));
        assert_eq!(repo.list_reviews().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_review_update_checks_links() {
        let (repo, _, _, mut review) = seeded().await;

        review.customer_id = 77;
        let result = repo.update_review(&review).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_reviews_filtered_in_id_order() {
        let (repo, alice, widget, first) = seeded().await;
        let bob = repo
            .create_customer(&CreateCustomerRequest::new("Bob"))
            .await
            .unwrap();
        let second = repo
            .create_review(&CreateReviewRequest::new("Ok", bob.id, widget.id))
            .await
            .unwrap();
        let third = repo
            .create_review(&CreateReviewRequest::new("Again", alice.id, widget.id))
            .await
            .unwrap();

        assert_eq!(
            repo.list_reviews_for_customer(alice.id).await.unwrap(),
            vec![first.clone(), third.clone()]
        );
        assert_eq!(
            repo.list_reviews_for_item(widget.id).await.unwrap(),
            vec![first, second, third]
        );
    }

    #[tokio::test]
    async fn test_review_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        assert_eq!(
            repo.delete_review(5).await,
            Err(RepositoryError::not_found("Review", 5))
        );
    }
}
