//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, worker, and UI
//! layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects and presentation signals emitted by the handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use vitrine::app::{handle_event, AppState, Event};
//! use vitrine::ui::{format::PriceLocale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
