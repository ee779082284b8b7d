//! Item CLI commands.

use clap::{Parser, Subcommand};

use reviewdesk_core::catalog::EntityId;

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all items.
    List,
    /// Get item by ID, with its reviews.
    Get {
        /// Item ID.
        id: EntityId,
    },
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item price.
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
    },
    /// Update an item.
    Update {
        /// Item ID.
        id: EntityId,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New price.
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: EntityId,
    },
}
