//! Pretty output formatting.

use reviewdesk_core::catalog::{
    CustomerSummary, CustomerView, ItemSummary, ItemView, ReviewSummary, ReviewView,
};

fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Format a customer summary line.
pub fn format_customer_summary(customer: &CustomerSummary) -> String {
    format!("{}\n  ID: {}", customer.name, customer.id)
}

/// Format an item summary line.
pub fn format_item_summary(item: &ItemSummary) -> String {
    format!(
        "{} ({})\n  ID: {}",
        item.name,
        format_price(item.price),
        item.id
    )
}

/// Format a review summary line.
pub fn format_review_summary(review: &ReviewSummary) -> String {
    format!("\"{}\"\n  ID: {}", review.comment, review.id)
}

fn format_list<T>(title: &str, values: &[T], format_one: fn(&T) -> String) -> String {
    if values.is_empty() {
        return format!("No {} found.", title.to_lowercase());
    }
    let mut output = format!("{} ({})\n", title, values.len());
    output.push_str(&"-".repeat(40));
    for value in values {
        output.push_str(&format!("\n{}", format_one(value)));
        output.push('\n');
    }
    output
}

/// Format customers for display.
pub fn format_customers(customers: &[CustomerSummary]) -> String {
    format_list("CUSTOMERS", customers, format_customer_summary)
}

/// Format items for display.
pub fn format_items(items: &[ItemSummary]) -> String {
    format_list("ITEMS", items, format_item_summary)
}

/// Format reviews for display.
pub fn format_reviews(reviews: &[ReviewSummary]) -> String {
    format_list("REVIEWS", reviews, format_review_summary)
}

/// Format a customer with its items and reviews.
pub fn format_customer(customer: &CustomerView) -> String {
    let mut output = format!("{}\n  ID: {}", customer.name, customer.id);

    output.push_str(&format!("\n  Items ({}):", customer.items.len()));
    for item in &customer.items {
        output.push_str(&format!(
            "\n    - [{}] {} ({})",
            item.id,
            item.name,
            format_price(item.price)
        ));
    }

    output.push_str(&format!("\n  Reviews ({}):", customer.reviews.len()));
    for review in &customer.reviews {
        output.push_str(&format!("\n    - [{}] {}", review.id, review.comment));
    }
    output
}

/// Format an item with its reviews.
pub fn format_item(item: &ItemView) -> String {
    let mut output = format!(
        "{} ({})\n  ID: {}",
        item.name,
        format_price(item.price),
        item.id
    );

    output.push_str(&format!("\n  Reviews ({}):", item.reviews.len()));
    for review in &item.reviews {
        output.push_str(&format!("\n    - [{}] {}", review.id, review.comment));
    }
    output
}

/// Format a review with its customer and item.
pub fn format_review(review: &ReviewView) -> String {
    let customer = match &review.customer {
        Some(c) => format!("{} [{}]", c.name, c.id),
        None => "(unknown)".to_string(),
    };
    let item = match &review.item {
        Some(i) => format!("{} [{}]", i.name, i.id),
        None => "(unknown)".to_string(),
    };

    format!(
        "\"{}\"\n  ID: {}\n  Customer: {}\n  Item: {}",
        review.comment, review.id, customer, item
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_customers(&[]), "No customers found.");
    }

    #[test]
    fn test_format_items_list() {
        let items = vec![ItemSummary {
            id: 5,
            name: "Widget".to_string(),
            price: 9.99,
        }];

        let output = format_items(&items);

        assert!(output.starts_with("ITEMS (1)"));
        assert!(output.contains("Widget (9.99)\n  ID: 5"));
    }

    #[test]
    fn test_format_customer_view() {
        let view = CustomerView {
            id: 1,
            name: "Alice".to_string(),
            items: vec![ItemSummary {
                id: 5,
                name: "Widget".to_string(),
                price: 9.99,
            }],
            reviews: vec![ReviewSummary {
                id: 10,
                comment: "Great".to_string(),
            }],
        };

        assert_eq!(
            format_customer(&view),
            "Alice\n  ID: 1\n  Items (1):\n    - [5] Widget (9.99)\n  Reviews (1):\n    - [10] Great"
        );
    }

    #[test]
    fn test_format_review_with_unknown_links() {
        let view = ReviewView {
            id: 10,
            comment: "Great".to_string(),
            customer: None,
            item: None,
        };

        let output = format_review(&view);

        assert!(output.contains("Customer: (unknown)"));
        assert!(output.contains("Item: (unknown)"));
    }
}
