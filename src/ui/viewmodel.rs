//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only; prices are already
//! formatted and titles already truncated.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the result table inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// Category, sort, and tag chips. `None` while the catalog is loading.
    pub facets: Option<FacetBarInfo>,

    pub footer: FooterInfo,

    /// Set while loading, or when the current filters match nothing.
    pub empty_state: Option<EmptyState>,

    /// Set while searching or while a search text is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Set in detail mode.
    pub detail: Option<DetailView>,

    pub notice: Option<NoticeInfo>,
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub category: String,
    /// Locale-formatted price.
    pub price: String,
    pub rating: String,
    pub seller: String,
    pub is_selected: bool,

    /// Character ranges of the title matching the search text.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Filter controls shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBarInfo {
    pub category: String,
    pub sort: String,
    pub tags: Vec<TagChip>,
}

/// A selectable tag facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    /// 1-based number of the key that toggles this tag.
    pub key: usize,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// `true` while the catalog has not loaded yet.
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// `true` when keystrokes edit the query.
    pub is_focused: bool,
}

/// Every display field of a single listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub media: String,
    pub category: String,
    pub seller: String,
    pub description: String,
    pub price: String,
    pub rating: String,
    pub tags: Vec<String>,
    pub cart_count: usize,
}

/// Severity of a status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-line status message above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub message: String,
    pub kind: NoticeKind,
}
