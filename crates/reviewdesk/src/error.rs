//! CLI error types.

use thiserror::Error;

use reviewdesk_core::catalog::{EntityId, ValidationError};
use reviewdesk_core::storage::RepositoryError;

/// Result type alias for command execution.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity_type} {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: EntityId,
    },

    #[error("Seed data references missing {entity_type} at position {index}")]
    InvalidSeed {
        entity_type: &'static str,
        index: usize,
    },
}

impl CliError {
    pub fn not_found(entity_type: &'static str, id: EntityId) -> Self {
        Self::NotFound { entity_type, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            CliError::not_found("Customer", 3).to_string(),
            "Customer 3 not found"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CliError = ValidationError::EmptyCustomerName.into();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().starts_with("Invalid input: "));
    }

    #[test]
    fn test_repository_error_converts() {
        let err: CliError = RepositoryError::not_found("Item", 9).into();
        assert_eq!(err.to_string(), "Storage error: Item not found: 9");
    }
}
