//! Catalog layer: where listings come from and how they are queried.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait, the load capability
//! - `mock`: Fixed sample listings served after a simulated latency
//! - `store`: Validated, read-only listing collection with facets
//! - `facets`: Distinct category and tag derivation
//! - `engine`: Pure filter/sort pipeline

pub mod engine;
pub mod facets;
pub mod mock;
pub mod source;
pub mod store;

pub use engine::{apply, comparator_for};
pub use facets::{derive_categories, derive_tags};
pub use mock::{MockCatalogSource, DEFAULT_LATENCY_MS};
pub use source::CatalogSource;
pub use store::CatalogStore;
