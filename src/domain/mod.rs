//! Domain layer for the Vitrine plugin.
//!
//! Core types with no dependency on Zellij APIs: catalog listings, the query
//! state that drives filtering, and the in-memory cart.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing, seller, and media types
//! - [`query`]: Query state, category filter, and sort keys
//! - [`cart`]: Cart and purchase simulation
//!
//! # Examples
//!
//! ```
//! use vitrine::domain::{QueryState, SortKey};
//!
//! let mut query = QueryState::default();
//! query.set_sort_key(SortKey::PriceDescending);
//! assert_eq!(query.sort_key(), SortKey::PriceDescending);
//! ```

pub mod cart;
pub mod error;
pub mod listing;
pub mod query;

pub use cart::{simulate_purchase, Cart, PurchaseConfirmation};
pub use error::{Result, VitrineError};
pub use listing::{Listing, Media, Seller};
pub use query::{CategoryFilter, QueryState, SortKey};
