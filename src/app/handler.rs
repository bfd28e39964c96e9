//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where events turn into state changes
//! and actions. The plugin shim maps keys to events and executes the
//! returned actions; tests drive the same function directly.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenDetail`, `CloseDetail`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Query**: `SetSearchText`, `SetCategory`, `ToggleTag`, `SetSortKey`, plus the
//!   keyboard shortcuts built on them
//! - **Detail actions**: `SimulatePurchase`, `AddToCart`
//! - **Catalog**: `RequestCatalog`, `WorkerResponse`
//!
//! Every query event re-runs the engine and emits [`Action::ResultsChanged`].
//!
//! # Example
//!
//! ```rust
//! use vitrine::app::{handle_event, Action, AppState, Event};
//! use vitrine::ui::{format::PriceLocale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
//! let (_, actions) = handle_event(&mut state, &Event::RequestCatalog { latency_ms: 0 })?;
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CategoryFilter, SortKey};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection down by one (wraps to top).
    KeyDown,
    /// Moves selection up by one (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus. The current text is kept.
    SearchMode,
    /// Focuses the search input (from navigating).
    FocusSearchBar,
    /// Focuses the results (from typing). Leaves search if the text is blank.
    FocusResults,
    /// Leaves search mode. The search text stays applied.
    ExitSearch,
    /// Types a character into the search input.
    Char(char),
    /// Deletes the last character of the search input.
    Backspace,
    /// Leaves the current mode: closes the detail view or exits search.
    Escape,

    /// Replaces the search text.
    SetSearchText(String),
    SetCategory(CategoryFilter),
    /// Moves to the next category, after `All`.
    NextCategory,
    PreviousCategory,
    /// Toggles a tag by name.
    ToggleTag(String),
    /// Toggles the tag at a zero-based facet position.
    ToggleTagAt(usize),
    SetSortKey(SortKey),
    /// Advances to the next sort key, wrapping.
    CycleSortKey,
    /// Restores the default query.
    ResetFilters,

    /// Opens the detail view for the selected listing.
    OpenDetail,
    CloseDetail,
    /// Simulates buying the listing in the detail view.
    SimulatePurchase,
    /// Adds the listing in the detail view to the cart.
    AddToCart,

    /// Asks the worker for the catalog. Only the first request is sent.
    RequestCatalog {
        /// Simulated load latency for the mock source.
        latency_ms: u64,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Returns `true` for events that come from the keyboard.
    ///
    /// Keyboard events dismiss the current notice.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(self, Self::RequestCatalog { .. } | Self::WorkerResponse(_))
    }
}

fn results_changed(ids: Vec<String>) -> Vec<Action> {
    vec![Action::ResultsChanged { ids }]
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag says whether the UI needs a re-render.
///
/// # Errors
///
/// Reserved for state transitions that can fail. Rejected catalogs and worker
/// failures are reported through the notice instead, so the plugin keeps
/// running.
///
/// # Example
///
/// ```rust
/// use vitrine::app::{handle_event, Action, AppState, Event};
/// use vitrine::catalog::MockCatalogSource;
/// use vitrine::domain::SortKey;
/// use vitrine::ui::{format::PriceLocale, Theme};
/// use vitrine::worker::WorkerResponse;
///
/// let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
/// let loaded = WorkerResponse::CatalogLoaded { listings: MockCatalogSource::sample_listings() };
/// handle_event(&mut state, &Event::WorkerResponse(loaded))?;
///
/// let (render, actions) = handle_event(&mut state, &Event::SetSortKey(SortKey::PriceAscending))?;
/// assert!(render);
/// assert!(matches!(&actions[0], Action::ResultsChanged { ids } if ids[0] == "prime-video"));
/// # Ok::<(), vitrine::VitrineError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice = event.is_user_input() && state.notice.take().is_some();
    let (render, actions) = dispatch(state, event)?;
    Ok((render || cleared_notice, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!("focusing search input");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_input().trim().is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query().search_text(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            let ids = state.push_search_char(*c);
            tracing::trace!(query = %state.search_input(), char = %c, "search query updated");
            Ok((true, results_changed(ids)))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            let ids = state.pop_search_char();
            Ok((true, results_changed(ids)))
        }
        Event::Escape => match state.input_mode {
            InputMode::Detail => {
                state.close_detail();
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::SetSearchText(text) => {
            let ids = state.set_search_text(text);
            Ok((true, results_changed(ids)))
        }
        Event::SetCategory(category) => {
            let ids = state.set_category(category.clone());
            Ok((true, results_changed(ids)))
        }
        Event::NextCategory => {
            let ids = state.cycle_category(true);
            Ok((true, results_changed(ids)))
        }
        Event::PreviousCategory => {
            let ids = state.cycle_category(false);
            Ok((true, results_changed(ids)))
        }
        Event::ToggleTag(tag) => {
            let (active, ids) = state.toggle_tag(tag);
            tracing::debug!(tag = %tag, active = active, "tag toggled");
            Ok((true, results_changed(ids)))
        }
        Event::ToggleTagAt(position) => {
            let Some(tag) = state.tag_at(*position).map(str::to_string) else {
                tracing::debug!(position = position, "no tag at facet position");
                return Ok((false, vec![]));
            };
            let (_, ids) = state.toggle_tag(&tag);
            Ok((true, results_changed(ids)))
        }
        Event::SetSortKey(sort_key) => {
            let ids = state.set_sort_key(*sort_key);
            Ok((true, results_changed(ids)))
        }
        Event::CycleSortKey => {
            let next = state.query().sort_key().next();
            tracing::debug!(sort_key = %next, "sort key cycled");
            let ids = state.set_sort_key(next);
            Ok((true, results_changed(ids)))
        }
        Event::ResetFilters => {
            let ids = state.reset_filters();
            Ok((true, results_changed(ids)))
        }
        Event::OpenDetail => Ok((state.open_detail(), vec![])),
        Event::CloseDetail => {
            if state.input_mode != InputMode::Detail {
                return Ok((false, vec![]));
            }
            state.close_detail();
            Ok((true, vec![]))
        }
        Event::SimulatePurchase => {
            if state.input_mode != InputMode::Detail {
                return Ok((false, vec![]));
            }
            Ok(state.purchase_detail_listing().map_or_else(
                || (false, vec![]),
                |confirmation| {
                    tracing::info!(listing_id = %confirmation.listing_id, "purchase simulated");
                    (true, vec![Action::PurchaseConfirmed(confirmation)])
                },
            ))
        }
        Event::AddToCart => {
            if state.input_mode != InputMode::Detail {
                return Ok((false, vec![]));
            }
            Ok(state.add_detail_listing_to_cart().map_or_else(
                || (false, vec![]),
                |(title, count)| {
                    tracing::debug!(title = %title, cart_len = count, "added to cart");
                    (true, vec![Action::CartUpdated { title, count }])
                },
            ))
        }
        Event::RequestCatalog { latency_ms } => {
            if !state.mark_catalog_requested() {
                tracing::debug!("catalog already requested, skipping");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::PostToWorker(WorkerMessage::load_catalog(*latency_ms))]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { listings } => match state.install_catalog(listings.clone()) {
                Ok(true) => {
                    tracing::info!(listing_count = listings.len(), "catalog installed");
                    let facets = Action::FacetsReady {
                        categories: state.categories().to_vec(),
                        tags: state.tags().to_vec(),
                    };
                    Ok((true, vec![facets, Action::ResultsChanged { ids: state.result_ids() }]))
                }
                Ok(false) => Ok((false, vec![])),
                Err(e) => {
                    tracing::error!(error = %e, "catalog rejected");
                    state.set_error_notice(format!("Catalog rejected: {e}"));
                    Ok((true, vec![]))
                }
            },
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                state.set_error_notice(format!("Catalog load failed: {message}"));
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;
    use crate::ui::format::PriceLocale;
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::NoticeKind;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let response = WorkerResponse::CatalogLoaded {
            listings: MockCatalogSource::sample_listings(),
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        state
    }

    fn ids_of(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .find_map(|action| match action {
                Action::ResultsChanged { ids } => Some(ids.clone()),
                _ => None,
            })
            .expect("ResultsChanged action")
    }

    #[test]
    fn catalog_load_emits_facets_then_results() {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let response = WorkerResponse::CatalogLoaded {
            listings: MockCatalogSource::sample_listings(),
        };
        let (render, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(render);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            Action::FacetsReady { categories, tags } => {
                assert_eq!(categories, &["Streaming", "Esportes", "Música", "Games", "Educação"]);
                assert_eq!(tags, &["entrega-imediata", "4k", "garantia", "perfil-privado"]);
            }
            other => panic!("expected FacetsReady, got {other:?}"),
        }
        assert_eq!(ids_of(&actions).len(), 7);
    }

    #[test]
    fn duplicate_catalog_response_is_ignored() {
        let mut state = loaded_state();
        let response = WorkerResponse::CatalogLoaded { listings: vec![] };
        let (render, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.results().len(), 7);
    }

    #[test]
    fn invalid_catalog_leaves_state_unloaded() {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let mut listings = MockCatalogSource::sample_listings();
        listings[0].rating = 7.5;
        let response = WorkerResponse::CatalogLoaded { listings };
        let (render, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loaded());
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn worker_error_sets_error_notice() {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let response = WorkerResponse::Error {
            message: "timeout".to_string(),
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert_eq!(state.notice.as_ref().unwrap().message, "Catalog load failed: timeout");
    }

    #[test]
    fn typing_edits_search_only_in_typing_focus() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::Char('h')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "hbo".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.results().len(), 1);

        let (_, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_input(), "hb");
        assert_eq!(ids_of(&actions), vec!["hbo-max"]);
    }

    #[test]
    fn escape_leaves_search_and_keeps_text() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::SetSearchText("spotify".to_string())).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query().search_text(), "spotify");
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn focus_results_with_blank_query_returns_to_normal() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char(' ')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn toggle_tag_at_position_uses_facet_order() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::ToggleTagAt(1)).unwrap();
        assert!(render);
        assert_eq!(ids_of(&actions), vec!["netflix-premium"]);

        let (render, actions) = handle_event(&mut state, &Event::ToggleTagAt(40)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn cycle_sort_key_walks_every_key() {
        let mut state = loaded_state();
        let mut seen = vec![state.query().sort_key()];
        for _ in 0..4 {
            handle_event(&mut state, &Event::CycleSortKey).unwrap();
            seen.push(state.query().sort_key());
        }
        assert_eq!(seen.first(), seen.last());
        assert!(seen.contains(&SortKey::PriceDescending));
    }

    #[test]
    fn reset_filters_restores_full_catalog() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SetCategory(CategoryFilter::Only("Games".to_string()))).unwrap();
        handle_event(&mut state, &Event::ToggleTag("garantia".to_string())).unwrap();
        assert_eq!(state.results().len(), 1);

        let (_, actions) = handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert_eq!(ids_of(&actions).len(), 7);
        assert!(state.query().is_default());
    }

    #[test]
    fn purchase_emits_confirmation_and_closes_detail() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert_eq!(state.input_mode, InputMode::Detail);

        let (render, actions) = handle_event(&mut state, &Event::SimulatePurchase).unwrap();
        assert!(render);
        match &actions[..] {
            [Action::PurchaseConfirmed(confirmation)] => {
                assert_eq!(confirmation.listing_id, "netflix-premium");
            }
            other => panic!("expected PurchaseConfirmed, got {other:?}"),
        }
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn detail_actions_are_ignored_outside_detail() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::SimulatePurchase).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::AddToCart).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn any_key_dismisses_notice() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        handle_event(&mut state, &Event::AddToCart).unwrap();
        assert!(state.notice.is_some());

        let (render, _) = handle_event(&mut state, &Event::Char('z')).unwrap();
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn catalog_is_requested_once() {
        let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
        let (_, first) = handle_event(&mut state, &Event::RequestCatalog { latency_ms: 350 }).unwrap();
        let (_, second) = handle_event(&mut state, &Event::RequestCatalog { latency_ms: 350 }).unwrap();

        assert_eq!(first.len(), 1);
        match &first[0] {
            Action::PostToWorker(WorkerMessage::LoadCatalog { latency_ms, .. }) => assert_eq!(*latency_ms, 350),
            other => panic!("expected LoadCatalog, got {other:?}"),
        }
        assert!(second.is_empty());
    }
}
