//! Listing domain model.
//!
//! A [`Listing`] is one purchasable subscription offer in the catalog. Listings
//! are immutable once loaded: the catalog store hands out shared references and
//! nothing in the crate mutates them afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Highest value allowed for ratings and seller reputations.
pub const MAX_SCORE: f64 = 5.0;

/// Seller reference attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    /// Optional reputation score in `[0, 5]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<f64>,
}

impl Seller {
    /// Creates a seller without a reputation score.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reputation: None,
        }
    }

    /// Sets the seller's reputation score.
    #[must_use]
    pub fn with_reputation(mut self, reputation: f64) -> Self {
        self.reputation = Some(reputation);
        self
    }
}

/// Cosmetic display hint for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Media {
    /// A symbol rendered inline, typically an emoji.
    Symbol(String),
    /// A reference to an image (URL or path).
    Image(String),
}

impl Media {
    /// Text used when the media is shown in a terminal cell.
    ///
    /// Images cannot be drawn, so a generic marker stands in for them.
    #[must_use]
    pub fn glyph(&self) -> &str {
        match self {
            Self::Symbol(symbol) => symbol,
            Self::Image(_) => "▣",
        }
    }
}

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Unique, stable identifier within a loaded catalog
/// - `price`: Non-negative currency amount with 2-decimal semantics
/// - `rating`: Score in `[0, 5]`
/// - `tags`: Labels treated as a set for filtering (order irrelevant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub seller: Seller,
    #[serde(default)]
    pub tags: Vec<String>,
    pub media: Media,
}

impl Listing {
    /// Returns `true` if the listing carries every tag in `required`.
    ///
    /// Duplicate tags on the listing are harmless; the check is a set
    /// superset test.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use vitrine::domain::{Listing, Media, Seller};
    ///
    /// let listing = Listing {
    ///     id: "a".into(),
    ///     title: "A".into(),
    ///     description: String::new(),
    ///     category: "Streaming".into(),
    ///     price: 10.0,
    ///     rating: 4.0,
    ///     seller: Seller::new("s", "Seller"),
    ///     tags: vec!["4k".into(), "garantia".into()],
    ///     media: Media::Symbol("🎬".into()),
    /// };
    ///
    /// let required: BTreeSet<String> = ["4k".to_string()].into_iter().collect();
    /// assert!(listing.has_all_tags(&required));
    /// ```
    #[must_use]
    pub fn has_all_tags<'a, I>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        let own: HashSet<&str> = self.tags.iter().map(String::as_str).collect();
        required.into_iter().all(|tag| own.contains(tag.as_str()))
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle_lower` must already be lower-cased. An empty needle matches.
    #[must_use]
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }

    /// Checks the listing's numeric invariants.
    ///
    /// Returns a description of the first violation found.
    pub(crate) fn invariant_violation(&self) -> Option<String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Some(format!("listing {} has invalid price {}", self.id, self.price));
        }
        if !(0.0..=MAX_SCORE).contains(&self.rating) {
            return Some(format!("listing {} has rating {} outside [0, 5]", self.id, self.rating));
        }
        if let Some(reputation) = self.seller.reputation {
            if !(0.0..=MAX_SCORE).contains(&reputation) {
                return Some(format!(
                    "seller {} of listing {} has reputation {reputation} outside [0, 5]",
                    self.seller.id, self.id
                ));
            }
        }
        None
    }
}
