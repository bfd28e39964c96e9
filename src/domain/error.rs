//! Error types for the Vitrine plugin.
//!
//! This module defines the centralized error type [`VitrineError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! The filter/sort engine and facet derivation never fail. Errors only arise at
//! the edges: validating a loaded catalog, reading theme files, and talking to
//! the background worker.

use thiserror::Error;

/// The main error type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine::domain::VitrineError;
///
/// fn check_price(price: f64) -> Result<(), VitrineError> {
///     if price < 0.0 {
///         return Err(VitrineError::Catalog(format!("negative price {price}")));
///     }
///     Ok(())
/// }
///
/// assert!(check_price(-1.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum VitrineError {
    /// A loaded catalog violates a listing invariant.
    ///
    /// Raised by [`CatalogStore::new`](crate::catalog::CatalogStore::new) for
    /// duplicate ids, negative prices, or ratings outside `[0, 5]`, and by
    /// catalog sources that fail to produce listings.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Covers payload (de)serialization and error responses posted back by the
    /// worker thread.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Vitrine operations.
pub type Result<T> = std::result::Result<T, VitrineError>;
