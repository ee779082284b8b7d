//! Request types for catalog operations.
//!
//! Create requests carry everything but the identity, which the storage
//! backend assigns. Update requests carry only the fields being changed.

use serde::{Deserialize, Serialize};

use super::types::{Customer, EntityId, Item, Review};

/// Request payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
}

impl CreateCustomerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Convert into a Customer with the assigned identity.
    pub fn into_customer(self, id: EntityId) -> Customer {
        Customer::new(id, self.name)
    }
}

/// Request payload for updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Apply updates to an existing customer.
    pub fn apply_to(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
    }
}

/// Request payload for creating an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
}

impl CreateItemRequest {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Convert into an Item with the assigned identity.
    pub fn into_item(self, id: EntityId) -> Item {
        Item::new(id, self.name, self.price)
    }
}

/// Request payload for updating an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl UpdateItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Apply updates to an existing item.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

/// Request payload for creating a review.
///
/// Both referenced rows must already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub comment: String,
    pub customer_id: EntityId,
    pub item_id: EntityId,
}

impl CreateReviewRequest {
    pub fn new(comment: impl Into<String>, customer_id: EntityId, item_id: EntityId) -> Self {
        Self {
            comment: comment.into(),
            customer_id,
            item_id,
        }
    }

    /// Convert into a Review with the assigned identity.
    pub fn into_review(self, id: EntityId) -> Review {
        Review::new(id, self.comment, self.customer_id, self.item_id)
    }
}

/// Request payload for updating a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<EntityId>,
}

impl UpdateReviewRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: EntityId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_item_id(mut self, item_id: EntityId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Apply updates to an existing review.
    pub fn apply_to(self, review: &mut Review) {
        if let Some(comment) = self.comment {
            review.comment = comment;
        }
        if let Some(customer_id) = self.customer_id {
            review.customer_id = customer_id;
        }
        if let Some(item_id) = self.item_id {
            review.item_id = item_id;
        }
    }
}
