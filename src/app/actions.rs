//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Besides effects on
//! Zellij (closing the pane, posting to the worker), actions carry the outbound
//! presentation signals: results changed, facets ready, purchase confirmed, and
//! cart updated.
//!
//! # Example
//!
//! ```rust
//! use vitrine::app::Action;
//! use vitrine::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_catalog(350))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::PurchaseConfirmation;
use crate::worker::WorkerMessage;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// The filter/sort engine produced a new ordered result list.
    ///
    /// Emitted after every re-evaluation, even when the list is empty.
    ResultsChanged {
        /// Listing ids in result order.
        ids: Vec<String>,
    },

    /// Category and tag facets are available for the filter controls.
    ///
    /// Emitted once, when the catalog store is built.
    FacetsReady {
        categories: Vec<String>,
        tags: Vec<String>,
    },

    /// A simulated purchase completed.
    PurchaseConfirmed(PurchaseConfirmation),

    /// A listing was appended to the cart.
    CartUpdated {
        /// Display name that was added.
        title: String,
        /// Cart length after the addition.
        count: usize,
    },
}
