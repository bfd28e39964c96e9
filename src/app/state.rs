//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the loaded
//! catalog, the query, the current results, selection, mode, cart, and the
//! status notice. Every query mutation goes through a setter here that
//! re-runs the filter/sort engine, so `results` can never be stale.
//!
//! # State Components
//!
//! - **Catalog**: `None` until the worker delivers the one-shot load
//! - **Query**: search text, category, active tags, and sort key
//! - **Results**: engine output, cloned in result order
//! - **Selection**: cursor within results, clamped after each re-evaluation
//! - **Cart / Notice**: session-only feedback for the detail actions
//!
//! # Example
//!
//! ```rust
//! use vitrine::app::AppState;
//! use vitrine::catalog::MockCatalogSource;
//! use vitrine::ui::{format::PriceLocale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
//! state.install_catalog(MockCatalogSource::sample_listings())?;
//! state.set_search_text("netflix");
//! assert_eq!(state.results().len(), 1);
//!
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.display_items[0].price, "R$ 24,90");
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::catalog::{self, CatalogStore};
use crate::domain::error::Result;
use crate::domain::{simulate_purchase, Cart, CategoryFilter, Listing, PurchaseConfirmation, QueryState, SortKey};
use crate::ui::components::table::{CATEGORY_WIDTH, PRICE_WIDTH, RATING_WIDTH, TITLE_WIDTH};
use crate::ui::format::{format_rating, PriceLocale};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailView, DisplayItem, EmptyState, FacetBarInfo, FooterInfo, HeaderInfo, NoticeInfo, NoticeKind,
    SearchBarInfo, TagChip, UIViewModel,
};

/// Number of tag facets reachable through the `1`-`9` keys.
pub const MAX_TAG_KEYS: usize = 9;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Option<CatalogStore>,

    query: QueryState,

    /// Raw search input as typed. The engine receives it trimmed.
    search_input: String,

    /// Engine output for the current query, in result order.
    results: Vec<Listing>,

    /// Zero-based index into `results`.
    ///
    /// Clamped by every re-evaluation, wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Listing shown by the detail view.
    detail_id: Option<String>,

    cart: Cart,

    /// Status line shown above the footer until the next key press.
    pub notice: Option<NoticeInfo>,

    catalog_requested: bool,

    pub locale: PriceLocale,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state waiting for the catalog load.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vitrine::app::AppState;
    /// use vitrine::ui::{format::PriceLocale, Theme};
    ///
    /// let state = AppState::new(Theme::default(), PriceLocale::EnUs);
    /// assert!(!state.is_loaded());
    /// assert!(state.results().is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme, locale: PriceLocale) -> Self {
        Self {
            catalog: None,
            query: QueryState::default(),
            search_input: String::new(),
            results: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            detail_id: None,
            cart: Cart::default(),
            notice: None,
            catalog_requested: false,
            locale,
            theme,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&CatalogStore> {
        self.catalog.as_ref()
    }

    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Search text as typed, before trimming.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Listings matching the current query, in result order.
    #[must_use]
    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    /// Ids of the current results, in result order.
    #[must_use]
    pub fn result_ids(&self) -> Vec<String> {
        self.results.iter().map(|listing| listing.id.clone()).collect()
    }

    /// Distinct categories in first-seen order. Empty before the load.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        match &self.catalog {
            Some(store) => store.categories(),
            None => &[],
        }
    }

    /// Distinct tags in first-seen order. Empty before the load.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match &self.catalog {
            Some(store) => store.tags(),
            None => &[],
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Records that the catalog load was requested.
    ///
    /// Returns `true` only on the first call.
    pub fn mark_catalog_requested(&mut self) -> bool {
        !std::mem::replace(&mut self.catalog_requested, true)
    }

    /// Builds the catalog store from a completed load and evaluates the query.
    ///
    /// Returns `Ok(false)` without touching state if a catalog is already
    /// installed.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Catalog`](crate::VitrineError::Catalog) if the
    /// listings violate a catalog invariant. The state stays unloaded.
    pub fn install_catalog(&mut self, listings: Vec<Listing>) -> Result<bool> {
        if self.catalog.is_some() {
            tracing::debug!(listing_count = listings.len(), "catalog already loaded, ignoring");
            return Ok(false);
        }

        self.catalog = Some(CatalogStore::new(listings)?);
        self.refresh();
        Ok(true)
    }

    /// Re-runs the filter/sort engine and clamps the selection.
    ///
    /// Returns the ordered result ids.
    pub fn refresh(&mut self) -> Vec<String> {
        let _span = tracing::debug_span!("refresh_results", previous_selection = self.selected_index).entered();

        self.results = self.catalog.as_ref().map_or_else(Vec::new, |store| {
            catalog::apply(store.listings(), &self.query)
                .into_iter()
                .cloned()
                .collect()
        });

        if self.results.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.len() - 1);
        }

        tracing::trace!(selected_index = self.selected_index, "selection clamped");

        self.result_ids()
    }

    /// Replaces the search text and re-evaluates.
    ///
    /// The engine receives the text trimmed; the raw text is kept for editing.
    pub fn set_search_text(&mut self, text: &str) -> Vec<String> {
        self.search_input = text.to_string();
        self.sync_search_text()
    }

    /// Appends a typed character to the search input and re-evaluates.
    pub fn push_search_char(&mut self, c: char) -> Vec<String> {
        self.search_input.push(c);
        self.sync_search_text()
    }

    /// Removes the last typed character and re-evaluates.
    pub fn pop_search_char(&mut self) -> Vec<String> {
        self.search_input.pop();
        self.sync_search_text()
    }

    fn sync_search_text(&mut self) -> Vec<String> {
        self.query.set_search_text(self.search_input.trim());
        self.refresh()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> Vec<String> {
        self.query.set_category(category);
        self.refresh()
    }

    /// Moves the category filter through `All` and each known category.
    ///
    /// A category no longer in the catalog restarts the cycle at `All`.
    pub fn cycle_category(&mut self, forward: bool) -> Vec<String> {
        let categories = self.categories();
        let slots = categories.len() + 1;

        let current = match self.query.category() {
            CategoryFilter::All => 0,
            CategoryFilter::Only(name) => categories.iter().position(|c| c == name).map_or(0, |i| i + 1),
        };

        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let category = match next {
            0 => CategoryFilter::All,
            n => CategoryFilter::Only(categories[n - 1].clone()),
        };
        self.set_category(category)
    }

    /// Toggles a tag and re-evaluates. Returns whether the tag is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> (bool, Vec<String>) {
        let active = self.query.toggle_tag(tag);
        (active, self.refresh())
    }

    /// Returns the tag bound to the zero-based facet position.
    #[must_use]
    pub fn tag_at(&self, position: usize) -> Option<&str> {
        self.tags().get(position).map(String::as_str)
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) -> Vec<String> {
        self.query.set_sort_key(sort_key);
        self.refresh()
    }

    /// Restores the default query, including the search input.
    pub fn reset_filters(&mut self) -> Vec<String> {
        self.search_input.clear();
        self.query.reset();
        self.refresh()
    }

    /// Moves selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.results.get(self.selected_index)
    }

    /// Listing shown in the detail view, if open.
    #[must_use]
    pub fn detail_listing(&self) -> Option<&Listing> {
        let id = self.detail_id.as_deref()?;
        self.catalog.as_ref()?.get(id)
    }

    /// Opens the detail view for the selected listing.
    ///
    /// Returns `false` when nothing is selected.
    pub fn open_detail(&mut self) -> bool {
        let Some(id) = self.selected_listing().map(|listing| listing.id.clone()) else {
            return false;
        };
        tracing::debug!(listing_id = %id, "opening detail view");
        self.detail_id = Some(id);
        self.input_mode = InputMode::Detail;
        true
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
        self.input_mode = InputMode::Normal;
    }

    /// Simulates buying the listing in the detail view, then closes it.
    pub fn purchase_detail_listing(&mut self) -> Option<PurchaseConfirmation> {
        let confirmation = simulate_purchase(self.detail_listing()?);
        self.close_detail();
        self.notice = Some(NoticeInfo {
            message: format!("Purchase confirmed: {}", confirmation.title),
            kind: NoticeKind::Success,
        });
        Some(confirmation)
    }

    /// Adds the detail listing's title to the cart. The view stays open.
    ///
    /// Returns the added title and the new cart length.
    pub fn add_detail_listing_to_cart(&mut self) -> Option<(String, usize)> {
        let title = self.detail_listing()?.title.clone();
        let count = self.cart.add(title.clone());
        self.notice = Some(NoticeInfo {
            message: format!("Added to cart: {title} ({count} items)"),
            kind: NoticeKind::Success,
        });
        Some((title, count))
    }

    pub fn set_error_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(NoticeInfo {
            message: message.into(),
            kind: NoticeKind::Error,
        });
    }

    /// Computes a renderable UI view model for the given terminal size.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome (header, facets, table header, notice, footer, search)
    /// 2. Center the window on the selected index
    /// 3. Pull the window back near the end to keep it full
    /// 4. Report the selection relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let notice = self.notice.clone();

        if self.catalog.is_none() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                facets: None,
                footer,
                empty_state: Some(EmptyState {
                    message: "Loading catalog…".to_string(),
                    subtitle: "Fetching listings".to_string(),
                    is_loading: true,
                }),
                search_bar: None,
                detail: None,
                notice,
            };
        }

        let search_bar = self.compute_search_bar();
        let facets = Some(self.compute_facets());
        let detail = self.compute_detail();

        if self.results.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                facets,
                footer,
                empty_state: Some(EmptyState {
                    message: "No listings match the current filters".to_string(),
                    subtitle: "Press x to clear filters".to_string(),
                    is_loading: false,
                }),
                search_bar,
                detail,
                notice,
            };
        }

        let available_rows = Self::calculate_available_rows(rows, search_bar.is_some());

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.results.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, listing)| self.compute_display_item(listing, visible_start + relative_idx, cols))
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header,
            facets,
            footer,
            empty_state: None,
            search_bar,
            detail,
            notice,
        }
    }

    fn compute_display_item(&self, listing: &Listing, absolute_idx: usize, cols: usize) -> DisplayItem {
        const FIXED_COLUMNS: usize = 2 + TITLE_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH + RATING_WIDTH + 4;

        let title = truncate(&listing.title, TITLE_WIDTH);
        let highlight_ranges = if self.query.search_text().is_empty() {
            vec![]
        } else {
            match_ranges(&title, self.query.search_text())
        };

        DisplayItem {
            category: truncate(&listing.category, CATEGORY_WIDTH),
            price: self.locale.format_price(listing.price),
            rating: format_rating(listing.rating),
            seller: truncate(&listing.seller.name, cols.saturating_sub(FIXED_COLUMNS + 1)),
            is_selected: absolute_idx == self.selected_index,
            title,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.catalog {
            None => " Vitrine (loading) ".to_string(),
            Some(store) => format!(
                " Vitrine: {} of {} listings  Cart: {} ",
                self.results.len(),
                store.len(),
                self.cart.len()
            ),
        };
        HeaderInfo { title }
    }

    fn compute_facets(&self) -> FacetBarInfo {
        let active = self.query.active_tags();
        let tags = self
            .tags()
            .iter()
            .take(MAX_TAG_KEYS)
            .enumerate()
            .map(|(i, tag)| TagChip {
                key: i + 1,
                label: tag.clone(),
                is_active: active.contains(tag),
            })
            .collect();

        FacetBarInfo {
            category: self.query.category().label().to_string(),
            sort: self.query.sort_key().label().to_string(),
            tags,
        }
    }

    fn compute_detail(&self) -> Option<DetailView> {
        if self.input_mode != InputMode::Detail {
            return None;
        }
        let listing = self.detail_listing()?;

        let seller = listing.seller.reputation.map_or_else(
            || listing.seller.name.clone(),
            |reputation| format!("{} ({})", listing.seller.name, format_rating(reputation)),
        );

        Some(DetailView {
            title: listing.title.clone(),
            media: listing.media.glyph().to_string(),
            category: listing.category.clone(),
            seller,
            description: listing.description.clone(),
            price: self.locale.format_price(listing.price),
            rating: format_rating(listing.rating),
            tags: listing.tags.clone(),
            cart_count: self.cart.len(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: details"
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  Enter: details  c/C: category  o: sort  1-9: tags  x: clear  q: quit"
            }
            InputMode::Detail => "b: buy  a: add to cart  ESC/q: back",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Visible while searching, and while a search text filters results.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.input_mode.is_search() || !self.search_input.is_empty() {
            Some(SearchBarInfo {
                query: self.search_input.clone(),
                is_focused: self.input_mode.is_typing(),
            })
        } else {
            None
        }
    }

    /// Rows left for the result table after subtracting UI chrome.
    ///
    /// Chrome is 6 rows above the table (spacer, header, border, two facet
    /// lines, column headers) and 4 below it (notice, border, footer, and the
    /// last terminal row). The search bar adds 3 rows.
    const fn calculate_available_rows(total_rows: usize, has_search_bar: bool) -> usize {
        let chrome = if has_search_bar { 13 } else { 10 };
        let available = total_rows.saturating_sub(chrome);
        if available == 0 {
            1
        } else {
            available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        state.install_catalog(MockCatalogSource::sample_listings()).unwrap();
        state
    }

    #[test]
    fn unloaded_state_shows_loading_empty_state() {
        let state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let vm = state.compute_viewmodel(24, 100);
        let empty = vm.empty_state.unwrap();
        assert!(empty.is_loading);
        assert_eq!(empty.message, "Loading catalog…");
        assert!(vm.facets.is_none());
        assert!(state.categories().is_empty());
    }

    #[test]
    fn install_runs_default_query() {
        let state = loaded_state();
        assert_eq!(state.results().len(), 7);
        assert_eq!(state.results()[0].id, "alura");
        assert_eq!(state.selected_listing().unwrap().id, "alura");
    }

    #[test]
    fn second_install_is_ignored() {
        let mut state = loaded_state();
        let installed = state.install_catalog(vec![]).unwrap();
        assert!(!installed);
        assert_eq!(state.catalog().unwrap().len(), 7);
    }

    struct SpanNames(std::sync::Arc<std::sync::Mutex<Vec<&'static str>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanNames {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            self.0.lock().unwrap().push(attrs.metadata().name());
        }
    }

    #[test]
    fn refresh_traces_the_engine_pass_once() {
        use tracing_subscriber::layer::SubscriberExt;

        let names = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(SpanNames(names.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let mut state = loaded_state();
            names.lock().unwrap().clear();
            state.set_sort_key(SortKey::PriceAscending);
        });

        let names = names.lock().unwrap();
        assert_eq!(names.iter().filter(|name| **name == "apply_query").count(), 1);
        assert_eq!(names.iter().filter(|name| **name == "refresh_results").count(), 1);
    }

    #[test]
    fn catalog_request_is_marked_once() {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        assert!(state.mark_catalog_requested());
        assert!(!state.mark_catalog_requested());
    }

    #[test]
    fn search_text_is_trimmed_for_the_engine() {
        let mut state = loaded_state();
        let ids = state.set_search_text("  netflix ");
        assert_eq!(ids, vec!["netflix-premium"]);
        assert_eq!(state.query().search_text(), "netflix");
        assert_eq!(state.search_input(), "  netflix ");
    }

    #[test]
    fn selection_clamps_when_results_shrink() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 6);

        state.set_category(CategoryFilter::Only("Streaming".to_string()));
        assert_eq!(state.results().len(), 3);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, state.results().len() - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn category_cycle_visits_all_then_each_category() {
        let mut state = loaded_state();
        state.cycle_category(true);
        assert_eq!(state.query().category(), &CategoryFilter::Only("Streaming".to_string()));

        state.cycle_category(false);
        assert_eq!(state.query().category(), &CategoryFilter::All);

        state.cycle_category(false);
        assert_eq!(state.query().category(), &CategoryFilter::Only("Educação".to_string()));
    }

    #[test]
    fn empty_result_has_distinct_empty_state() {
        let mut state = loaded_state();
        state.set_search_text("nenhum resultado");
        let vm = state.compute_viewmodel(24, 100);
        let empty = vm.empty_state.unwrap();
        assert!(!empty.is_loading);
        assert_eq!(empty.message, "No listings match the current filters");
        assert!(vm.facets.is_some());
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn viewmodel_formats_prices_with_locale() {
        let mut state = loaded_state();
        state.locale = PriceLocale::EnUs;
        state.set_sort_key(SortKey::PriceAscending);
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.display_items[0].price, "R$14.90");
        assert_eq!(vm.display_items[0].rating, "★ 4.4");
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = loaded_state();
        for _ in 0..6 {
            state.move_selection_down();
        }
        let vm = state.compute_viewmodel(13, 100);
        assert_eq!(vm.display_items.len(), 3);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Premiere Futebol - Times do Brasil");
    }

    #[test]
    fn search_matches_are_highlighted_in_titles() {
        let mut state = loaded_state();
        state.set_search_text("premium");
        let vm = state.compute_viewmodel(24, 100);
        let netflix = vm
            .display_items
            .iter()
            .find(|item| item.title.starts_with("Netflix"))
            .unwrap();
        assert_eq!(netflix.highlight_ranges, vec![(8, 15)]);
    }

    #[test]
    fn facet_bar_marks_active_tags() {
        let mut state = loaded_state();
        state.toggle_tag("4k");
        let facets = state.compute_viewmodel(24, 100).facets.unwrap();
        let chip = facets.tags.iter().find(|chip| chip.label == "4k").unwrap();
        assert!(chip.is_active);
        assert_eq!(chip.key, 2);
        assert_eq!(facets.category, "All");
        assert_eq!(facets.sort, "Relevance");
    }

    #[test]
    fn detail_view_shows_seller_reputation_and_cart_size() {
        let mut state = loaded_state();
        assert!(state.open_detail());
        state.add_detail_listing_to_cart();
        let detail = state.compute_viewmodel(24, 100).detail.unwrap();
        assert_eq!(detail.title, "Alura - Cursos de Tecnologia");
        assert_eq!(detail.seller, "Alura Partner (★ 4.9)");
        assert_eq!(detail.price, "R$ 39,90");
        assert_eq!(detail.cart_count, 1);
    }

    #[test]
    fn purchase_closes_detail_and_sets_notice() {
        let mut state = loaded_state();
        state.open_detail();
        let confirmation = state.purchase_detail_listing().unwrap();
        assert_eq!(confirmation.listing_id, "alura");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(
            state.notice.as_ref().unwrap().message,
            "Purchase confirmed: Alura - Cursos de Tecnologia"
        );
    }

    #[test]
    fn open_detail_without_results_is_refused() {
        let mut state = loaded_state();
        state.set_search_text("zzz");
        assert!(!state.open_detail());
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
