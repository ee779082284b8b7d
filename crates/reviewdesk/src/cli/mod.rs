//! CLI command definitions.

pub mod customers;
pub mod items;
pub mod reviews;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line tool for the reviewdesk catalog.
#[derive(Debug, Parser)]
#[command(name = "reviewdesk")]
#[command(version)]
#[command(about = "Manage customers, items and their reviews", long_about = None)]
pub struct Cli {
    /// SQLite database path.
    #[arg(long, env = "REVIEWDESK_DB")]
    pub database: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Customer management.
    Customers(customers::CustomersCommand),
    /// Item management.
    Items(items::ItemsCommand),
    /// Review management.
    Reviews(reviews::ReviewsCommand),
    /// Load a small sample catalog.
    Seed,
}
