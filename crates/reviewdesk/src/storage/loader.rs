//! Loads entities together with their relationships.
//!
//! The repositories only store foreign keys. These functions follow them to
//! build the aggregates the serializers work on. A key that points at a
//! missing row becomes `None` and is logged; storage failures propagate.

use std::collections::HashMap;

use reviewdesk_core::catalog::{
    CustomerWithReviews, EntityId, Item, ItemWithReviews, ResolvedReview, Review,
};
use reviewdesk_core::storage::{CatalogRepository, Result};

/// Loads a customer with every review it wrote, each review's item resolved.
pub async fn load_customer(
    repo: &dyn CatalogRepository,
    id: EntityId,
) -> Result<Option<CustomerWithReviews>> {
    let Some(customer) = repo.get_customer(id).await? else {
        return Ok(None);
    };

    let reviews = repo.list_reviews_for_customer(id).await?;
    let mut items: HashMap<EntityId, Option<Item>> = HashMap::new();
    let mut resolved = Vec::with_capacity(reviews.len());

    for review in reviews {
        let item = match items.get(&review.item_id) {
            Some(cached) => cached.clone(),
            None => {
                let item = fetch_item(repo, &review).await?;
                items.insert(review.item_id, item.clone());
                item
            }
        };

        resolved.push(ResolvedReview {
            review,
            customer: Some(customer.clone()),
            item,
        });
    }

    tracing::debug!(customer_id = id, reviews = resolved.len(), "Loaded customer");
    Ok(Some(CustomerWithReviews::new(customer).with_reviews(resolved)))
}

/// Loads an item with every review written about it.
pub async fn load_item(
    repo: &dyn CatalogRepository,
    id: EntityId,
) -> Result<Option<ItemWithReviews>> {
    let Some(item) = repo.get_item(id).await? else {
        return Ok(None);
    };

    let reviews = repo.list_reviews_for_item(id).await?;
    tracing::debug!(item_id = id, reviews = reviews.len(), "Loaded item");
    Ok(Some(ItemWithReviews::new(item).with_reviews(reviews)))
}

/// Loads a review with its customer and item.
pub async fn load_review(
    repo: &dyn CatalogRepository,
    id: EntityId,
) -> Result<Option<ResolvedReview>> {
    match repo.get_review(id).await? {
        Some(review) => Ok(Some(resolve_review(repo, review).await?)),
        None => Ok(None),
    }
}

/// Looks up both ends of an already loaded review.
pub async fn resolve_review(
    repo: &dyn CatalogRepository,
    review: Review,
) -> Result<ResolvedReview> {
    let customer = repo.get_customer(review.customer_id).await?;
    if customer.is_none() {
        tracing::warn!(
            review_id = review.id,
            customer_id = review.customer_id,
            "Review points at a missing customer"
        );
    }

    let item = fetch_item(repo, &review).await?;

    Ok(ResolvedReview {
        review,
        customer,
        item,
    })
}

async fn fetch_item(repo: &dyn CatalogRepository, review: &Review) -> Result<Option<Item>> {
    let item = repo.get_item(review.item_id).await?;
    if item.is_none() {
        tracing::warn!(
            review_id = review.id,
            item_id = review.item_id,
            "Review points at a missing item"
        );
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::inmemory::InMemoryRepository;
    use reviewdesk_core::catalog::{
        CreateCustomerRequest, CreateItemRequest, CreateReviewRequest, Customer, Serializable,
    };
    use reviewdesk_core::storage::{CustomerRepository, ItemRepository, ReviewRepository};

    #[tokio::test]
    async fn test_load_customer_without_reviews() {
        let repo = InMemoryRepository::new();
        let alice = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();

        let loaded = load_customer(&repo, alice.id).await.unwrap().unwrap();

        assert_eq!(loaded.customer, alice);
        assert!(loaded.reviews.is_empty());
        assert!(loaded.items().is_empty());
    }

    #[tokio::test]
    async fn test_load_customer_resolves_items_in_review_order() {
        let repo = InMemoryRepository::new();
        let alice = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();
        let widget = repo
            .create_item(&CreateItemRequest::new("Widget", 9.99))
            .await
            .unwrap();
        let lamp = repo
            .create_item(&CreateItemRequest::new("Lamp", 24.5))
            .await
            .unwrap();
        for (comment, item) in [("Great", &widget), ("Dim", &lamp), ("Still great", &widget)] {
            repo.create_review(&CreateReviewRequest::new(comment, alice.id, item.id))
                .await
                .unwrap();
        }

        let loaded = load_customer(&repo, alice.id).await.unwrap().unwrap();

        let names: Vec<&str> = loaded.items().into_iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Lamp", "Widget"]);
        assert!(loaded
            .reviews
            .iter()
            .all(|r| r.customer.as_ref() == Some(&alice)));
    }

    #[tokio::test]
    async fn test_load_missing_entities() {
        let repo = InMemoryRepository::new();

        assert!(load_customer(&repo, 1).await.unwrap().is_none());
        assert!(load_item(&repo, 1).await.unwrap().is_none());
        assert!(load_review(&repo, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_item_serializes_review_summaries() {
        let repo = InMemoryRepository::new();
        let alice = repo
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();
        let widget = repo
            .create_item(&CreateItemRequest::new("Widget", 9.99))
            .await
            .unwrap();
        repo.create_review(&CreateReviewRequest::new("Great", alice.id, widget.id))
            .await
            .unwrap();

        let loaded = load_item(&repo, widget.id).await.unwrap().unwrap();
        let json = serde_json::to_value(loaded.serialize()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "price": 9.99,
                "reviews": [{"id": 1, "comment": "Great"}]
            })
        );
    }

    #[tokio::test]
    async fn test_load_review_resolves_both_links() {
        let repo = InMemoryRepository::new();
        let bob = repo
            .create_customer(&CreateCustomerRequest::new("Bob"))
            .await
            .unwrap();
        let widget = repo
            .create_item(&CreateItemRequest::new("Widget", 9.99))
            .await
            .unwrap();
        let review = repo
            .create_review(&CreateReviewRequest::new("Fine", bob.id, widget.id))
            .await
            .unwrap();

        let resolved = load_review(&repo, review.id).await.unwrap().unwrap();

        assert_eq!(resolved.customer, Some(Customer::new(bob.id, "Bob")));
        assert_eq!(resolved.item, Some(widget));
    }

    #[tokio::test]
    async fn test_resolve_review_with_dangling_links() {
        let repo = InMemoryRepository::new();
        let dangling = Review::new(10, "Orphan", 1, 5);

        let resolved = resolve_review(&repo, dangling.clone()).await.unwrap();

        assert_eq!(resolved, ResolvedReview::unresolved(dangling));
        let json = serde_json::to_value(resolved.serialize()).unwrap();
        assert_eq!(json["customer"], serde_json::Value::Null);
        assert_eq!(json["item"], serde_json::Value::Null);
    }
}
