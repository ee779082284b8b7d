//! Nested serialization of catalog entities.
//!
//! Each entity has two renderings: a full view that includes its related
//! entities, and a summary that carries only identity and scalar fields.
//! Related entities are always embedded as summaries, so a rendering never
//! recurses back through the relationship it came from.
//!
//! The view types derive `Serialize`; their JSON encoding is the response
//! body shape (`{"id": .., "name": .., "items": [..], "reviews": [..]}`).

use serde::{Deserialize, Serialize};

use super::projection::items_via_reviews;
use super::types::{
    Customer, CustomerWithReviews, EntityId, Item, ItemWithReviews, Review, ResolvedReview,
};

/// Minimal customer rendering for nested use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: EntityId,
    pub name: String,
}

/// Minimal item rendering for nested use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
}

/// Minimal review rendering for nested use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub id: EntityId,
    pub comment: String,
}

/// Full customer rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: EntityId,
    pub name: String,
    pub items: Vec<ItemSummary>,
    pub reviews: Vec<ReviewSummary>,
}

/// Full item rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
    pub reviews: Vec<ReviewSummary>,
}

/// Full review rendering. Unresolved links serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: EntityId,
    pub comment: String,
    pub customer: Option<CustomerSummary>,
    pub item: Option<ItemSummary>,
}

/// An entity that can render itself for API responses.
pub trait Serializable {
    /// Full rendering, related entities included as summaries.
    type View: Serialize;
    /// Identity and scalar fields only.
    type Summary: Serialize;

    fn serialize(&self) -> Self::View;

    fn serialize_summary(&self) -> Self::Summary;

    /// Alias for [`Serializable::serialize`].
    fn to_dict(&self) -> Self::View {
        self.serialize()
    }
}

impl Customer {
    pub fn serialize_summary(&self) -> CustomerSummary {
        CustomerSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Item {
    pub fn serialize_summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
        }
    }
}

impl Review {
    pub fn serialize_summary(&self) -> ReviewSummary {
        ReviewSummary {
            id: self.id,
            comment: self.comment.clone(),
        }
    }
}

impl Serializable for CustomerWithReviews {
    type View = CustomerView;
    type Summary = CustomerSummary;

    fn serialize(&self) -> CustomerView {
        CustomerView {
            id: self.customer.id,
            name: self.customer.name.clone(),
            items: items_via_reviews(&self.reviews)
                .into_iter()
                .map(Item::serialize_summary)
                .collect(),
            reviews: self
                .reviews
                .iter()
                .map(|resolved| resolved.review.serialize_summary())
                .collect(),
        }
    }

    fn serialize_summary(&self) -> CustomerSummary {
        self.customer.serialize_summary()
    }
}

impl Serializable for ItemWithReviews {
    type View = ItemView;
    type Summary = ItemSummary;

    fn serialize(&self) -> ItemView {
        ItemView {
            id: self.item.id,
            name: self.item.name.clone(),
            price: self.item.price,
            reviews: self.reviews.iter().map(Review::serialize_summary).collect(),
        }
    }

    fn serialize_summary(&self) -> ItemSummary {
        self.item.serialize_summary()
    }
}

impl Serializable for ResolvedReview {
    type View = ReviewView;
    type Summary = ReviewSummary;

    fn serialize(&self) -> ReviewView {
        ReviewView {
            id: self.review.id,
            comment: self.review.comment.clone(),
            customer: self.customer.as_ref().map(Customer::serialize_summary),
            item: self.item.as_ref().map(Item::serialize_summary),
        }
    }

    fn serialize_summary(&self) -> ReviewSummary {
        self.review.serialize_summary()
    }
}
