//! Filter/sort engine.
//!
//! [`apply`] maps a catalog and a query to an ordered list of listing
//! references. It is pure: no listing is cloned or mutated, and calling it twice
//! with the same inputs yields the same references in the same order.
//!
//! # Pipeline
//!
//! 1. **Text**: case-insensitive substring on title or description
//! 2. **Category**: exact match unless the filter is `All`
//! 3. **Tags**: listing tags must be a superset of the active tags (AND)
//! 4. **Sort**: stable sort by the comparator bound to the sort key
//!
//! The three filters commute; they only narrow the input.

use crate::domain::{Listing, QueryState, SortKey};
use std::cmp::Ordering;

/// Runs the filter/sort pipeline.
///
/// An empty result is a valid outcome, not an error.
///
/// # Examples
///
/// ```
/// use vitrine::catalog::{apply, MockCatalogSource};
/// use vitrine::domain::QueryState;
///
/// let catalog = MockCatalogSource::sample_listings();
/// let mut query = QueryState::default();
/// query.set_search_text("NETFLIX");
///
/// let results = apply(&catalog, &query);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, "netflix-premium");
/// ```
#[must_use]
pub fn apply<'a>(catalog: &'a [Listing], query: &QueryState) -> Vec<&'a Listing> {
    let _span = tracing::debug_span!("apply_query",
        catalog_size = catalog.len(),
        query_len = query.search_text().len(),
        category = %query.category().label(),
        tag_count = query.active_tags().len(),
        sort_key = %query.sort_key()
    ).entered();

    let needle = query.search_text().to_lowercase();
    let category = query.category();
    let tags = query.active_tags();

    let mut results: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| listing.matches_text(&needle))
        .filter(|listing| category.accepts(&listing.category))
        .filter(|listing| tags.is_empty() || listing.has_all_tags(tags))
        .collect();

    let comparator = comparator_for(query.sort_key());
    results.sort_by(|a, b| comparator(a, b));

    tracing::debug!(result_count = results.len(), "query applied");
    results
}

/// Returns the comparator bound to a sort key.
///
/// Relevance and rating-descending share the same ordering.
#[must_use]
pub fn comparator_for(sort_key: SortKey) -> fn(&Listing, &Listing) -> Ordering {
    match sort_key {
        SortKey::Relevance | SortKey::RatingDescending => by_rating_desc,
        SortKey::PriceAscending => by_price_asc,
        SortKey::PriceDescending => by_price_desc,
    }
}

/// Total order on scores where `-0.0` and `0.0` compare equal.
fn cmp_scores(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

fn by_rating_desc(a: &Listing, b: &Listing) -> Ordering {
    cmp_scores(b.rating, a.rating)
}

fn by_price_asc(a: &Listing, b: &Listing) -> Ordering {
    cmp_scores(a.price, b.price)
}

fn by_price_desc(a: &Listing, b: &Listing) -> Ordering {
    cmp_scores(b.price, a.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;
    use crate::domain::{CategoryFilter, Media, Seller};

    fn ids<'a>(results: &[&'a Listing]) -> Vec<&'a str> {
        results.iter().map(|l| l.id.as_str()).collect()
    }

    fn tagged(id: &str, rating: f64, tags: &[&str]) -> Listing {
        Listing {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            category: "Streaming".into(),
            price: 10.0,
            rating,
            seller: Seller::new("s", "Seller"),
            tags: tags.iter().map(ToString::to_string).collect(),
            media: Media::Symbol("*".into()),
        }
    }

    #[test]
    fn default_query_returns_everything_by_rating() {
        let catalog = MockCatalogSource::sample_listings();
        let results = apply(&catalog, &QueryState::default());
        assert_eq!(
            ids(&results),
            [
                "alura",
                "netflix-premium",
                "spotify-familiar",
                "hbo-max",
                "xbox-game-pass",
                "prime-video",
                "premiere"
            ]
        );
    }

    #[test]
    fn text_filter_matches_description_case_insensitively() {
        let catalog = MockCatalogSource::sample_listings();
        let mut query = QueryState::default();
        query.set_search_text("BRASILEIRÃO");
        assert_eq!(ids(&apply(&catalog, &query)), ["premiere"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = MockCatalogSource::sample_listings();
        let mut query = QueryState::default();
        query.set_category(CategoryFilter::Only("streaming".into()));
        assert!(apply(&catalog, &query).is_empty());

        query.set_category(CategoryFilter::Only("Streaming".into()));
        assert_eq!(
            ids(&apply(&catalog, &query)),
            ["netflix-premium", "hbo-max", "prime-video"]
        );
    }

    #[test]
    fn tag_filter_is_conjunctive() {
        let catalog = vec![tagged("both", 3.0, &["a", "b"]), tagged("only-a", 4.0, &["a"])];
        let mut query = QueryState::default();
        query.toggle_tag("a");
        assert_eq!(ids(&apply(&catalog, &query)), ["only-a", "both"]);

        query.toggle_tag("b");
        assert_eq!(ids(&apply(&catalog, &query)), ["both"]);
    }

    #[test]
    fn equal_ratings_keep_catalog_order() {
        let catalog = vec![
            tagged("first", 4.0, &[]),
            tagged("second", 4.0, &[]),
            tagged("top", 5.0, &[]),
            tagged("third", 4.0, &[]),
        ];
        let results = apply(&catalog, &QueryState::default());
        assert_eq!(ids(&results), ["top", "first", "second", "third"]);
    }

    #[test]
    fn price_sorts_are_monotonic() {
        let catalog = MockCatalogSource::sample_listings();
        let mut query = QueryState::default();

        query.set_sort_key(SortKey::PriceAscending);
        let asc = apply(&catalog, &query);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(asc.first().map(|l| l.price), Some(14.90));

        query.set_sort_key(SortKey::PriceDescending);
        let desc = apply(&catalog, &query);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
        // xbox precedes alura at 39.90 because the sort is stable
        assert_eq!(ids(&desc)[..2], ["xbox-game-pass", "alura"]);
    }

    #[test]
    fn results_reference_catalog_elements() {
        let catalog = MockCatalogSource::sample_listings();
        let query = QueryState::default();
        let first = apply(&catalog, &query);
        let second = apply(&catalog, &query);
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b)));
        assert!(first
            .iter()
            .all(|r| catalog.iter().any(|c| std::ptr::eq(*r, c))));
    }

    #[test]
    fn signed_zero_prices_keep_catalog_order() {
        let mut catalog = vec![tagged("a", 4.0, &[]), tagged("b", 4.0, &[]), tagged("c", 4.0, &[])];
        catalog[0].price = 0.0;
        catalog[1].price = -0.0;
        catalog[2].price = 0.0;

        for sort_key in [SortKey::PriceAscending, SortKey::PriceDescending] {
            let mut query = QueryState::default();
            query.set_sort_key(sort_key);
            assert_eq!(ids(&apply(&catalog, &query)), ["a", "b", "c"]);
        }
    }

    #[test]
    fn signed_zero_ratings_keep_catalog_order() {
        let catalog = vec![tagged("a", 0.0, &[]), tagged("b", -0.0, &[]), tagged("c", 0.0, &[])];
        assert_eq!(ids(&apply(&catalog, &QueryState::default())), ["a", "b", "c"]);
    }
}
