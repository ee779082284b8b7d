//! Review CLI commands.

use clap::{Parser, Subcommand};

use reviewdesk_core::catalog::EntityId;

/// Review management commands.
#[derive(Debug, Parser)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub action: ReviewsAction,
}

/// Available review actions.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List all reviews.
    List,
    /// Get review by ID, with its customer and item.
    Get {
        /// Review ID.
        id: EntityId,
    },
    /// Create a new review.
    Create {
        /// Review text.
        #[arg(long)]
        comment: String,
        /// ID of the reviewing customer.
        #[arg(long)]
        customer_id: EntityId,
        /// ID of the reviewed item.
        #[arg(long)]
        item_id: EntityId,
    },
    /// Update a review.
    Update {
        /// Review ID.
        id: EntityId,
        /// New review text.
        #[arg(long)]
        comment: Option<String>,
        /// New customer ID.
        #[arg(long)]
        customer_id: Option<EntityId>,
        /// New item ID.
        #[arg(long)]
        item_id: Option<EntityId>,
    },
    /// Delete review by ID.
    Delete {
        /// Review ID.
        id: EntityId,
    },
}
