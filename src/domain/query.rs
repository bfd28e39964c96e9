//! Query state: the user's current search, filter, and sort selection.
//!
//! [`QueryState`] is the single mutable input to the filter/sort engine. It is
//! only changed through its named setters so every mutation site is visible in
//! the event handler.

use std::collections::BTreeSet;
use std::fmt;

/// Category selection, either the "all" sentinel or one exact category name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Keep only listings whose category equals this value (case-sensitive).
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a raw selector value.
    ///
    /// Empty strings map to [`CategoryFilter::All`], matching a select control
    /// whose "all" option has no value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns `true` if the listing category passes this filter.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Human-readable label for the facet bar.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(name) => name,
        }
    }
}

/// Ordering applied to the filtered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by rating (same comparator as [`SortKey::RatingDescending`]).
    #[default]
    Relevance,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortKey {
    /// All sort keys in cycling order.
    pub const ALL: [Self; 4] = [
        Self::Relevance,
        Self::PriceAscending,
        Self::PriceDescending,
        Self::RatingDescending,
    ];

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::RatingDescending => "rating-descending",
        }
    }

    /// Label shown in the facet bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAscending => "Lowest price",
            Self::PriceDescending => "Highest price",
            Self::RatingDescending => "Best rated",
        }
    }

    /// Parses a sort key name, accepting the legacy Portuguese selector values.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "relevance" | "relevancia" => Some(Self::Relevance),
            "price-ascending" | "menor-preco" => Some(Self::PriceAscending),
            "price-descending" | "maior-preco" => Some(Self::PriceDescending),
            "rating-descending" | "melhor-avaliacao" => Some(Self::RatingDescending),
            _ => None,
        }
    }

    /// Parses a sort key name, falling back to [`SortKey::Relevance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::domain::SortKey;
    ///
    /// assert_eq!(SortKey::parse_or_default("menor-preco"), SortKey::PriceAscending);
    /// assert_eq!(SortKey::parse_or_default("bogus"), SortKey::Relevance);
    /// ```
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(sort_key = %name, "unknown sort key, using relevance");
            Self::Relevance
        })
    }

    /// The key after this one in [`SortKey::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current search, filter, and sort parameters.
///
/// Created with defaults (empty search, all categories, no tags, relevance)
/// and mutated in place. Never persisted.
///
/// # Examples
///
/// ```
/// use vitrine::domain::{CategoryFilter, QueryState, SortKey};
///
/// let mut query = QueryState::default();
/// query.set_search_text("netflix");
/// query.set_category(CategoryFilter::Only("Streaming".into()));
/// assert!(query.toggle_tag("4k"));
/// query.set_sort_key(SortKey::PriceAscending);
///
/// assert_eq!(query.search_text(), "netflix");
/// assert!(!query.is_default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    search_text: String,
    category: CategoryFilter,
    active_tags: BTreeSet<String>,
    sort_key: SortKey,
}

impl QueryState {
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub const fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Adds the tag if absent, removes it if present.
    ///
    /// Returns `true` if the tag is active after the call.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_tags.remove(tag) {
            false
        } else {
            self.active_tags.insert(tag.to_string());
            true
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no filter is active and the sort is relevance.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
