//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Vitrine library and the Zellij plugin
//! system: key mapping, worker IPC, and action execution.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  CatalogWorker   │   │  ← Simulated catalog fetch
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Search
//! - `Enter`: Open listing details
//! - `c`/`C`: Next/previous category
//! - `o`: Cycle sort order
//! - `1`-`9`: Toggle tag
//! - `x`: Clear filters
//! - `q`: Close plugin
//!
//! In search mode (typing):
//! - Characters edit the query, `Enter` focuses results, `Esc` exits search
//!
//! In search mode (navigating):
//! - `j`/`k`: Move selection, `Enter`: Open details, `/`: Edit query, `Esc`: Exit
//!
//! In detail view:
//! - `b`: Simulate purchase
//! - `a`: Add to cart
//! - `Esc`/`q`: Back to results

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use vitrine::app::SearchFocus;
use vitrine::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use vitrine::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(CatalogWorker, vitrine_worker, VITRINE_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: vitrine::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Configured simulated load latency.
    latency_ms: u64,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: vitrine::initialize(&default_config),
            worker_name: "vitrine".to_string(),
            latency_ms: default_config.load_latency_ms,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state and tracing, subscribes to
    /// events, and asks the worker for the catalog.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        vitrine::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            latency_ms = config.load_latency_ms,
            locale = ?config.locale,
            "parsed configuration"
        );
        self.app = vitrine::initialize(&config);
        self.latency_ms = config.load_latency_ms;

        subscribe(&[EventType::Key, EventType::CustomMessage]);

        self.dispatch(&Event::RequestCatalog {
            latency_ms: self.latency_ms,
        });

        tracing::debug!("plugin load complete - waiting for catalog");
    }

    /// Translates Zellij events, delegates to `handle_event`, and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        vitrine::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key.bare_key),
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenDetail,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Esc => Event::ExitSearch,
                _ => return None,
            }),
            InputMode::Detail => Some(match key.bare_key {
                BareKey::Char('b') => Event::SimulatePurchase,
                BareKey::Char('a') => Event::AddToCart,
                BareKey::Esc | BareKey::Char('q') => Event::CloseDetail,
                _ => return None,
            }),
        }
    }

    fn map_normal_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Char('c') => Event::NextCategory,
            BareKey::Char('C') => Event::PreviousCategory,
            BareKey::Char('o') => Event::CycleSortKey,
            BareKey::Char('x') => Event::ResetFilters,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c @ '1'..='9') => {
                let position = c.to_digit(10)? as usize - 1;
                Event::ToggleTagAt(position)
            }
            _ => return None,
        })
    }

    /// Maps worker messages to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(payload_len = payload.len(), "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes the message as JSON and sends it to the worker.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    /// - `ResultsChanged`, `FacetsReady`, `PurchaseConfirmed`, `CartUpdated`:
    ///   already reflected in the view model, recorded as trace events
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
            Action::ResultsChanged { ids } => {
                tracing::debug!(result_count = ids.len(), "results changed");
            }
            Action::FacetsReady { categories, tags } => {
                tracing::debug!(
                    category_count = categories.len(),
                    tag_count = tags.len(),
                    "facets ready"
                );
            }
            Action::PurchaseConfirmed(confirmation) => {
                tracing::info!(
                    listing_id = %confirmation.listing_id,
                    title = %confirmation.title,
                    "purchase confirmed"
                );
            }
            Action::CartUpdated { title, count } => {
                tracing::info!(title = %title, cart_len = count, "cart updated");
            }
        }
    }
}
