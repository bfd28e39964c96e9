//! Read-only catalog store.
//!
//! A [`CatalogStore`] is built once from a completed load. Construction
//! validates listing invariants and derives the category and tag facets, so the
//! facets can never drift from the listings they describe.

use super::facets::{derive_categories, derive_tags};
use crate::domain::error::{Result, VitrineError};
use crate::domain::Listing;
use std::collections::HashMap;

/// Validated listings plus their derived facets.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    listings: Vec<Listing>,
    index: HashMap<String, usize>,
    categories: Vec<String>,
    tags: Vec<String>,
}

impl CatalogStore {
    /// Builds a store from loaded listings.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Catalog`] if two listings share an id, a price is
    /// negative or not finite, or a rating or seller reputation lies outside
    /// `[0, 5]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::catalog::{CatalogStore, MockCatalogSource};
    ///
    /// let store = CatalogStore::new(MockCatalogSource::sample_listings())?;
    /// assert!(store.get("alura").is_some());
    /// assert!(store.categories().contains(&"Games".to_string()));
    /// # Ok::<(), vitrine::VitrineError>(())
    /// ```
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_store_new", listing_count = listings.len()).entered();

        let mut index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            if let Some(violation) = listing.invariant_violation() {
                return Err(VitrineError::Catalog(violation));
            }
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(VitrineError::Catalog(format!(
                    "duplicate listing id {}",
                    listing.id
                )));
            }
        }

        let categories = derive_categories(&listings);
        let tags = derive_tags(&listings);

        tracing::debug!(
            category_count = categories.len(),
            tag_count = tags.len(),
            "catalog store built"
        );

        Ok(Self {
            listings,
            index,
            categories,
            tags,
        })
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Looks a listing up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.index.get(id).and_then(|&position| self.listings.get(position))
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
