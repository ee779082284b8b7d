mod error;
mod naming;
mod traits;

pub use error::{RepositoryError, Result};
pub use naming::{foreign_key_name, CUSTOMERS_TABLE, ITEMS_TABLE, REVIEWS_TABLE};
pub use traits::{CatalogRepository, CustomerRepository, ItemRepository, ReviewRepository};
