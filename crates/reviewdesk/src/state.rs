//! Application state with repository-based storage.
//!
//! Holds the repository trait object every command runs against. The
//! concrete backend is chosen by feature flag in the factory modules below.

use std::sync::Arc;

use reviewdesk_core::storage::CatalogRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository (customers, items and reviews).
    pub repo: Arc<dyn CatalogRepository>,
}

impl AppState {
    /// Wraps an already constructed repository.
    fn build(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Borrow the repository as a trait object.
    pub fn repo(&self) -> &dyn CatalogRepository {
        self.repo.as_ref()
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_storage {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage at `config.sqlite_path`.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::debug!(path = %config.sqlite_path, "Using SQLite storage");
            Ok(Self::build(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_storage {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage. The database path is ignored.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::debug!("Using in-memory storage");
            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use reviewdesk_core::catalog::CreateCustomerRequest;

    #[tokio::test]
    async fn test_clones_share_repository() {
        let state = AppState::default();
        let clone = state.clone();

        state
            .repo()
            .create_customer(&CreateCustomerRequest::new("Alice"))
            .await
            .unwrap();

        assert_eq!(clone.repo().list_customers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_new_from_config() {
        let config = Config {
            sqlite_path: ":memory:".to_string(),
            log_filter: "reviewdesk=info".to_string(),
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.repo().list_customers().await.unwrap().is_empty());
    }
}
