//! Facet derivation for filter controls.
//!
//! Categories and tags are not fixed enums; the selectable values are whatever
//! appears in the loaded catalog, in first-seen order.

use crate::domain::Listing;
use std::collections::HashSet;

/// Distinct categories in first-seen order.
///
/// # Examples
///
/// ```
/// use vitrine::catalog::{derive_categories, MockCatalogSource};
///
/// let categories = derive_categories(&MockCatalogSource::sample_listings());
/// assert_eq!(categories[0], "Streaming");
/// ```
#[must_use]
pub fn derive_categories(catalog: &[Listing]) -> Vec<String> {
    distinct(catalog.iter().map(|listing| listing.category.as_str()))
}

/// Distinct tags across all listings in first-seen order.
#[must_use]
pub fn derive_tags(catalog: &[Listing]) -> Vec<String> {
    distinct(
        catalog
            .iter()
            .flat_map(|listing| listing.tags.iter().map(String::as_str)),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(String::from)
        .collect()
}
