use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Creates a `NotFound` error for an entity identity.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates the error reported when a row is deleted while reviews still
    /// reference it.
    pub fn still_referenced(entity_type: &'static str, id: impl ToString) -> Self {
        Self::InvalidData(format!(
            "{entity_type} {} is still referenced by reviews",
            id.to_string()
        ))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Review",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Review not found: 42");
    }

    #[test]
    fn test_still_referenced_message() {
        let error = RepositoryError::still_referenced("Item", 5);
        assert_eq!(
            error.to_string(),
            "Invalid data: Item 5 is still referenced by reviews"
        );
    }

    #[test]
    fn test_not_found_helper() {
        assert_eq!(
            RepositoryError::not_found("Customer", 3),
            RepositoryError::NotFound {
                entity_type: "Customer",
                id: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Customer",
            id: "7".to_string(),
        };
        assert_eq!(error.to_string(), "Customer already exists: 7");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such column: prize".to_string());
        assert_eq!(error.to_string(), "Query failed: no such column: prize");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error =
            RepositoryError::InvalidData("Customer 1 is still referenced by reviews".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Customer 1 is still referenced by reviews"
        );
    }
}
