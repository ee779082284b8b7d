//! Demo catalog used for seeding a fresh database.
//!
//! Reviews reference customers and items by their position in the seed
//! lists, since identities are only known once the rows are inserted.

use super::requests::{CreateCustomerRequest, CreateItemRequest};

/// A review to seed, linked by index into [`SeedCatalog`] lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReview {
    pub customer: usize,
    pub item: usize,
    pub comment: &'static str,
}

/// Demo rows to insert, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalog {
    pub customers: Vec<CreateCustomerRequest>,
    pub items: Vec<CreateItemRequest>,
    pub reviews: Vec<SeedReview>,
}

/// Builds the demo catalog.
///
/// One customer reviews the same item twice and one customer has no
/// reviews at all.
pub fn seed_catalog() -> SeedCatalog {
    let customers = ["Alice", "Bob", "Carmen", "Dmitri"]
        .into_iter()
        .map(CreateCustomerRequest::new)
        .collect();

    let items = [
        ("Widget", 9.99),
        ("Desk Lamp", 24.5),
        ("Mechanical Keyboard", 89.0),
        ("Coffee Grinder", 42.75),
    ]
    .into_iter()
    .map(|(name, price)| CreateItemRequest::new(name, price))
    .collect();

    let review = |customer, item, comment| SeedReview {
        customer,
        item,
        comment,
    };
    let reviews = vec![
        review(0, 0, "Great"),
        review(0, 1, "Bright enough for reading"),
        review(1, 2, "Loud but satisfying"),
        review(1, 0, "Broke after a week"),
        review(2, 3, "Makes a fine espresso grind"),
        review(0, 0, "Bought a second one, still great"),
    ];

    SeedCatalog {
        customers,
        items,
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reviews_reference_seed_rows() {
        let seed = seed_catalog();
        for review in &seed.reviews {
            assert!(review.customer < seed.customers.len());
            assert!(review.item < seed.items.len());
        }
    }

    #[test]
    fn test_seed_has_customer_without_reviews() {
        let seed = seed_catalog();
        let reviewed: Vec<usize> = seed.reviews.iter().map(|r| r.customer).collect();
        assert!((0..seed.customers.len()).any(|c| !reviewed.contains(&c)));
    }

    #[test]
    fn test_seed_has_repeated_item_review() {
        let seed = seed_catalog();
        let alice_widget = seed
            .reviews
            .iter()
            .filter(|r| r.customer == 0 && r.item == 0)
            .count();
        assert_eq!(alice_widget, 2);
    }
}
