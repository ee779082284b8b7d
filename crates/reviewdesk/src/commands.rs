//! Command execution.
//!
//! Each command runs against the repository and returns the text to print,
//! or `None` when there is nothing to show.

use reviewdesk_core::catalog::{
    validate_create_customer, validate_create_item, validate_create_review, validate_customer,
    validate_item, validate_review, CreateCustomerRequest, CreateItemRequest, CreateReviewRequest,
    Customer, EntityId, Item, Review, Serializable, UpdateCustomerRequest, UpdateItemRequest,
    UpdateReviewRequest,
};
use reviewdesk_core::storage::CatalogRepository;

use crate::cli::customers::{CustomersAction, CustomersCommand};
use crate::cli::items::{ItemsAction, ItemsCommand};
use crate::cli::reviews::{ReviewsAction, ReviewsCommand};
use crate::cli::{Commands, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{json, pretty};
use crate::seed::seed;
use crate::storage::loader::{load_customer, load_item, load_review};

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Printer {
    fn render<T: serde::Serialize>(
        &self,
        value: &T,
        format_pretty: impl FnOnce(&T) -> String,
    ) -> String {
        match self.format {
            OutputFormat::Json => json::format_json(value),
            OutputFormat::Pretty => format_pretty(value),
        }
    }

    fn note(&self, message: String) -> Option<String> {
        (!self.quiet).then_some(message)
    }
}

/// Runs a parsed command.
pub async fn execute(
    command: Commands,
    repo: &dyn CatalogRepository,
    printer: Printer,
) -> Result<Option<String>> {
    match command {
        Commands::Customers(cmd) => customers(cmd, repo, printer).await,
        Commands::Items(cmd) => items(cmd, repo, printer).await,
        Commands::Reviews(cmd) => reviews(cmd, repo, printer).await,
        Commands::Seed => {
            let report = seed(repo).await?;
            Ok(printer.note(format!(
                "Seeded {} customers, {} items and {} reviews",
                report.customers, report.items, report.reviews
            )))
        }
    }
}

// ============================================================================
// Customers
// ============================================================================

async fn show_customer(
    repo: &dyn CatalogRepository,
    printer: Printer,
    id: EntityId,
    prefix: &str,
) -> Result<Option<String>> {
    let loaded = load_customer(repo, id)
        .await?
        .ok_or(CliError::not_found("Customer", id))?;
    let rendered = printer.render(&loaded.to_dict(), pretty::format_customer);
    Ok(Some(with_prefix(printer, prefix, rendered)))
}

async fn customers(
    cmd: CustomersCommand,
    repo: &dyn CatalogRepository,
    printer: Printer,
) -> Result<Option<String>> {
    match cmd.action {
        CustomersAction::List => {
            let summaries: Vec<_> = repo
                .list_customers()
                .await?
                .iter()
                .map(Customer::serialize_summary)
                .collect();
            Ok(Some(printer.render(&summaries, |s| pretty::format_customers(s))))
        }
        CustomersAction::Get { id } => show_customer(repo, printer, id, "").await,
        CustomersAction::Create { name } => {
            let request = CreateCustomerRequest::new(name);
            validate_create_customer(&request)?;

            let customer = repo.create_customer(&request).await?;
            tracing::info!(%customer, "Created customer");
            show_customer(repo, printer, customer.id, "Created:\n").await
        }
        CustomersAction::Update { id, name } => {
            let mut customer = repo
                .get_customer(id)
                .await?
                .ok_or(CliError::not_found("Customer", id))?;
            UpdateCustomerRequest::new()
                .with_name(name)
                .apply_to(&mut customer);
            validate_customer(&customer)?;

            repo.update_customer(&customer).await?;
            tracing::info!(id, "Updated customer");
            show_customer(repo, printer, id, "Updated:\n").await
        }
        CustomersAction::Delete { id } => {
            repo.delete_customer(id).await?;
            tracing::info!(id, "Deleted customer");
            Ok(printer.note(format!("Deleted customer {id}")))
        }
    }
}

// ============================================================================
// Items
// ============================================================================

async fn show_item(
    repo: &dyn CatalogRepository,
    printer: Printer,
    id: EntityId,
    prefix: &str,
) -> Result<Option<String>> {
    let loaded = load_item(repo, id)
        .await?
        .ok_or(CliError::not_found("Item", id))?;
    let rendered = printer.render(&loaded.to_dict(), pretty::format_item);
    Ok(Some(with_prefix(printer, prefix, rendered)))
}

async fn items(
    cmd: ItemsCommand,
    repo: &dyn CatalogRepository,
    printer: Printer,
) -> Result<Option<String>> {
    match cmd.action {
        ItemsAction::List => {
            let summaries: Vec<_> = repo
                .list_items()
                .await?
                .iter()
                .map(Item::serialize_summary)
                .collect();
            Ok(Some(printer.render(&summaries, |s| pretty::format_items(s))))
        }
        ItemsAction::Get { id } => show_item(repo, printer, id, "").await,
        ItemsAction::Create { name, price } => {
            let request = CreateItemRequest::new(name, price);
            validate_create_item(&request)?;

            let item = repo.create_item(&request).await?;
            tracing::info!(%item, "Created item");
            show_item(repo, printer, item.id, "Created:\n").await
        }
        ItemsAction::Update { id, name, price } => {
            let mut item = repo
                .get_item(id)
                .await?
                .ok_or(CliError::not_found("Item", id))?;
            UpdateItemRequest { name, price }.apply_to(&mut item);
            validate_item(&item)?;

            repo.update_item(&item).await?;
            tracing::info!(id, "Updated item");
            show_item(repo, printer, id, "Updated:\n").await
        }
        ItemsAction::Delete { id } => {
            repo.delete_item(id).await?;
            tracing::info!(id, "Deleted item");
            Ok(printer.note(format!("Deleted item {id}")))
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

async fn show_review(
    repo: &dyn CatalogRepository,
    printer: Printer,
    id: EntityId,
    prefix: &str,
) -> Result<Option<String>> {
    let loaded = load_review(repo, id)
        .await?
        .ok_or(CliError::not_found("Review", id))?;
    let rendered = printer.render(&loaded.to_dict(), pretty::format_review);
    Ok(Some(with_prefix(printer, prefix, rendered)))
}

async fn reviews(
    cmd: ReviewsCommand,
    repo: &dyn CatalogRepository,
    printer: Printer,
) -> Result<Option<String>> {
    match cmd.action {
        ReviewsAction::List => {
            let summaries: Vec<_> = repo
                .list_reviews()
                .await?
                .iter()
                .map(Review::serialize_summary)
                .collect();
            Ok(Some(printer.render(&summaries, |s| pretty::format_reviews(s))))
        }
        ReviewsAction::Get { id } => show_review(repo, printer, id, "").await,
        ReviewsAction::Create {
            comment,
            customer_id,
            item_id,
        } => {
            let request = CreateReviewRequest::new(comment, customer_id, item_id);
            validate_create_review(&request)?;

            let review = repo.create_review(&request).await?;
            tracing::info!(%review, customer_id, item_id, "Created review");
            show_review(repo, printer, review.id, "Created:\n").await
        }
        ReviewsAction::Update {
            id,
            comment,
            customer_id,
            item_id,
        } => {
            let mut review = repo
                .get_review(id)
                .await?
                .ok_or(CliError::not_found("Review", id))?;
            UpdateReviewRequest {
                comment,
                customer_id,
                item_id,
            }
            .apply_to(&mut review);
            validate_review(&review)?;

            repo.update_review(&review).await?;
            tracing::info!(id, "Updated review");
            show_review(repo, printer, id, "Updated:\n").await
        }
        ReviewsAction::Delete { id } => {
            repo.delete_review(id).await?;
            tracing::info!(id, "Deleted review");
            Ok(printer.note(format!("Deleted review {id}")))
        }
    }
}

/// Pretty output gets a heading after writes; JSON output stays parseable.
fn with_prefix(printer: Printer, prefix: &str, rendered: String) -> String {
    match printer.format {
        OutputFormat::Pretty => format!("{prefix}{rendered}"),
        OutputFormat::Json => rendered,
    }
}
