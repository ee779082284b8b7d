use serde::{Deserialize, Serialize};

/// Identity type shared by all catalog entities.
///
/// Identities are assigned by the storage backend on insert.
pub type EntityId = i64;

/// A person who writes reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
}

impl Customer {
    /// Creates a customer with a known identity.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Customer {}, {}>", self.id, self.name)
    }
}

/// A product that can be reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    /// Expected to be non-negative, not enforced.
    pub price: f64,
}

impl Item {
    /// Creates an item with a known identity.
    pub fn new(id: EntityId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl std::fmt::Display for Item {
    // Debug formatting keeps the fractional part of whole prices ("89.0").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Item {}, {}, {:?}>", self.id, self.name, self.price)
    }
}

/// A comment written by one customer about one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    pub comment: String,
    /// The customer who wrote this review.
    pub customer_id: EntityId,
    /// The item this review is about.
    pub item_id: EntityId,
}

impl Review {
    /// Creates a review with a known identity.
    pub fn new(
        id: EntityId,
        comment: impl Into<String>,
        customer_id: EntityId,
        item_id: EntityId,
    ) -> Self {
        Self {
            id,
            comment: comment.into(),
            customer_id,
            item_id,
        }
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Review {}, {}>", self.id, self.comment)
    }
}

/// A review with both of its many-to-one links looked up.
///
/// A link is `None` when the referenced row could not be found.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReview {
    pub review: Review,
    pub customer: Option<Customer>,
    pub item: Option<Item>,
}

impl ResolvedReview {
    /// Wraps a review whose links have not been resolved.
    pub fn unresolved(review: Review) -> Self {
        Self {
            review,
            customer: None,
            item: None,
        }
    }

    /// Sets the resolved customer.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Sets the resolved item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }
}

/// A customer together with its review collection.
///
/// An unloaded collection is an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerWithReviews {
    pub customer: Customer,
    pub reviews: Vec<ResolvedReview>,
}

impl CustomerWithReviews {
    /// Wraps a customer with no reviews loaded.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            reviews: Vec::new(),
        }
    }

    /// Sets the review collection.
    pub fn with_reviews(mut self, reviews: Vec<ResolvedReview>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Items referenced by this customer's reviews, in review order.
    pub fn items(&self) -> Vec<&Item> {
        super::projection::items_via_reviews(&self.reviews)
    }
}

/// An item together with its review collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithReviews {
    pub item: Item,
    pub reviews: Vec<Review>,
}

impl ItemWithReviews {
    /// Wraps an item with no reviews loaded.
    pub fn new(item: Item) -> Self {
        Self {
            item,
            reviews: Vec::new(),
        }
    }

    /// Sets the review collection.
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_with_reviews_starts_empty() {
        let customer = CustomerWithReviews::new(Customer::new(1, "Alice"));
        assert!(customer.reviews.is_empty());
        assert!(customer.items().is_empty());
    }

    #[test]
    fn test_resolved_review_builders() {
        let resolved = ResolvedReview::unresolved(Review::new(10, "Great", 1, 5))
            .with_customer(Customer::new(1, "Alice"))
            .with_item(Item::new(5, "Widget", 9.99));

        assert_eq!(resolved.customer.map(|c| c.name), Some("Alice".to_string()));
        assert_eq!(resolved.item.map(|i| i.id), Some(5));
    }

    #[test]
    fn test_display_shapes() {
        assert_eq!(Customer::new(1, "Alice").to_string(), "<Customer 1, Alice>");
        assert_eq!(
            Item::new(5, "Widget", 9.99).to_string(),
            "<Item 5, Widget, 9.99>"
        );
        assert_eq!(
            Item::new(3, "Keyboard", 89.0).to_string(),
            "<Item 3, Keyboard, 89.0>"
        );
        assert_eq!(
            Review::new(10, "Great", 1, 5).to_string(),
            "<Review 10, Great>"
        );
    }

    #[test]
    fn test_review_serde_field_names() {
        let review = Review::new(10, "Great", 1, 5);
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 10, "comment": "Great", "customer_id": 1, "item_id": 5})
        );
    }
}
