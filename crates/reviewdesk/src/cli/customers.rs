//! Customer CLI commands.

use clap::{Parser, Subcommand};

use reviewdesk_core::catalog::EntityId;

/// Customer management commands.
#[derive(Debug, Parser)]
pub struct CustomersCommand {
    #[command(subcommand)]
    pub action: CustomersAction,
}

/// Available customer actions.
#[derive(Debug, Subcommand)]
pub enum CustomersAction {
    /// List all customers.
    List,
    /// Get customer by ID, with its items and reviews.
    Get {
        /// Customer ID.
        id: EntityId,
    },
    /// Create a new customer.
    Create {
        /// Customer name.
        #[arg(long)]
        name: String,
    },
    /// Rename a customer.
    Update {
        /// Customer ID.
        id: EntityId,
        /// New name.
        #[arg(long)]
        name: String,
    },
    /// Delete customer by ID.
    Delete {
        /// Customer ID.
        id: EntityId,
    },
}
