//! Inserts the demo catalog through the repository traits.

use reviewdesk_core::catalog::{seed_catalog, CreateReviewRequest, SeedCatalog};
use reviewdesk_core::storage::CatalogRepository;

use crate::error::{CliError, Result};

/// Counts of rows inserted by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: usize,
    pub items: usize,
    pub reviews: usize,
}

/// Inserts the built-in demo catalog.
pub async fn seed(repo: &dyn CatalogRepository) -> Result<SeedReport> {
    insert_catalog(repo, seed_catalog()).await
}

/// Inserts a catalog, translating seed positions into assigned ids.
pub async fn insert_catalog(
    repo: &dyn CatalogRepository,
    catalog: SeedCatalog,
) -> Result<SeedReport> {
    let mut customer_ids = Vec::with_capacity(catalog.customers.len());
    for request in &catalog.customers {
        customer_ids.push(repo.create_customer(request).await?.id);
    }

    let mut item_ids = Vec::with_capacity(catalog.items.len());
    for request in &catalog.items {
        item_ids.push(repo.create_item(request).await?.id);
    }

    for seed_review in &catalog.reviews {
        let customer_id = *customer_ids
            .get(seed_review.customer)
            .ok_or(CliError::InvalidSeed {
                entity_type: "Customer",
                index: seed_review.customer,
            })?;
        let item_id = *item_ids.get(seed_review.item).ok_or(CliError::InvalidSeed {
            entity_type: "Item",
            index: seed_review.item,
        })?;

        repo.create_review(&CreateReviewRequest::new(
            seed_review.comment,
            customer_id,
            item_id,
        ))
        .await?;
    }

    let report = SeedReport {
        customers: customer_ids.len(),
        items: item_ids.len(),
        reviews: catalog.reviews.len(),
    };
    tracing::info!(
        customers = report.customers,
        items = report.items,
        reviews = report.reviews,
        "Seeded catalog"
    );
    Ok(report)
}
