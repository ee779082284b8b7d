use super::types::{Item, ResolvedReview};

/// Projects a review collection onto the items it references.
///
/// Order follows `reviews`. Reviews whose item is unresolved are skipped.
/// An item reviewed more than once appears once per review.
pub fn items_via_reviews(reviews: &[ResolvedReview]) -> Vec<&Item> {
    reviews
        .iter()
        .filter_map(|resolved| resolved.item.as_ref())
        .collect()
}
