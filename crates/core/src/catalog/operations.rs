use super::error::ValidationError;
use super::requests::{CreateCustomerRequest, CreateItemRequest, CreateReviewRequest};
use super::types::{Customer, Item, Review};

/// Validates a customer before update.
pub fn validate_customer(customer: &Customer) -> Result<(), ValidationError> {
    check_customer_name(&customer.name)
}

/// Validates an item before update.
///
/// Negative prices are accepted.
pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    check_item_name(&item.name)?;
    check_price(item.price)
}

/// Validates a review before update.
///
/// Referential integrity is checked by the storage backend, not here.
pub fn validate_review(review: &Review) -> Result<(), ValidationError> {
    check_comment(&review.comment)
}

/// Validates a customer creation request.
pub fn validate_create_customer(request: &CreateCustomerRequest) -> Result<(), ValidationError> {
    check_customer_name(&request.name)
}

/// Validates an item creation request.
pub fn validate_create_item(request: &CreateItemRequest) -> Result<(), ValidationError> {
    check_item_name(&request.name)?;
    check_price(request.price)
}

/// Validates a review creation request.
pub fn validate_create_review(request: &CreateReviewRequest) -> Result<(), ValidationError> {
    check_comment(&request.comment)
}

fn check_customer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyCustomerName);
    }
    Ok(())
}

fn check_item_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    Ok(())
}

// SQLite stores NaN as NULL, which the NOT NULL column rejects.
fn check_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(())
}

fn check_comment(comment: &str) -> Result<(), ValidationError> {
    if comment.trim().is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer() {
        assert!(validate_customer(&Customer::new(1, "Alice")).is_ok());
        assert_eq!(
            validate_customer(&Customer::new(1, "  ")),
            Err(ValidationError::EmptyCustomerName)
        );
    }

    #[test]
    fn test_validate_item_accepts_negative_price() {
        assert!(validate_item(&Item::new(1, "Refund", -5.0)).is_ok());
        assert!(validate_create_item(&CreateItemRequest::new("Refund", -5.0)).is_ok());
    }

    #[test]
    fn test_validate_item_rejects_non_finite_price() {
        assert!(matches!(
            validate_item(&Item::new(1, "Widget", f64::NAN)),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            validate_create_item(&CreateItemRequest::new("Widget", f64::INFINITY)),
            Err(ValidationError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_validate_item_empty_name() {
        assert_eq!(
            validate_item(&Item::new(1, "", 1.0)),
            Err(ValidationError::EmptyItemName)
        );
    }

    #[test]
    fn test_validate_review() {
        assert!(validate_review(&Review::new(1, "Great", 1, 1)).is_ok());
        assert_eq!(
            validate_review(&Review::new(1, "", 1, 1)),
            Err(ValidationError::EmptyComment)
        );
    }

    #[test]
    fn test_validate_create_requests() {
        assert!(validate_create_customer(&CreateCustomerRequest::new("Alice")).is_ok());
        assert_eq!(
            validate_create_customer(&CreateCustomerRequest::new("")),
            Err(ValidationError::EmptyCustomerName)
        );
        assert_eq!(
            validate_create_review(&CreateReviewRequest::new(" \t", 1, 5)),
            Err(ValidationError::EmptyComment)
        );
    }
}
