use thiserror::Error;

/// Errors that can occur when validating catalog requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Customer name cannot be empty")]
    EmptyCustomerName,
    #[error("Item name cannot be empty")]
    EmptyItemName,
    #[error("Item price must be a finite number, got {0}")]
    InvalidPrice(String),
    #[error("Review comment cannot be empty")]
    EmptyComment,
}
