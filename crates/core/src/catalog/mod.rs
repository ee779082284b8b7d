mod error;
mod mock_data;
mod operations;
mod projection;
mod requests;
mod serialize;
mod types;

pub use error::ValidationError;
pub use mock_data::{seed_catalog, SeedCatalog, SeedReview};
pub use operations::{
    validate_create_customer, validate_create_item, validate_create_review, validate_customer,
    validate_item, validate_review,
};
pub use projection::items_via_reviews;
pub use requests::{
    CreateCustomerRequest, CreateItemRequest, CreateReviewRequest, UpdateCustomerRequest,
    UpdateItemRequest, UpdateReviewRequest,
};
pub use serialize::{
    CustomerSummary, CustomerView, ItemSummary, ItemView, ReviewSummary, ReviewView, Serializable,
};
pub use types::{
    Customer, CustomerWithReviews, EntityId, Item, ItemWithReviews, ResolvedReview, Review,
};
