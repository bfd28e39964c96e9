//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait: the one place where listings
//! enter the system. The plugin only ships a mock implementation, but the worker
//! talks to the trait so a networked source could be swapped in without touching
//! the engine or the application layer.

use crate::domain::error::Result;
use crate::domain::Listing;

/// Produces the full listing collection.
///
/// `load` may block the calling thread (it runs on the Zellij worker thread) and
/// is called exactly once per plugin session.
///
/// # Implementations
///
/// - [`MockCatalogSource`](crate::catalog::MockCatalogSource): fixed data with a
///   simulated fetch latency
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vitrine::catalog::{CatalogSource, MockCatalogSource};
///
/// let source = MockCatalogSource::new(Duration::ZERO);
/// let listings = source.load()?;
/// assert!(!listings.is_empty());
/// # Ok::<(), vitrine::VitrineError>(())
/// ```
pub trait CatalogSource: Send {
    /// Fetches every listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce listings. The mock source
    /// never fails.
    fn load(&self) -> Result<Vec<Listing>>;
}
