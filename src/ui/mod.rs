//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! components, with theme support and locale-aware price formatting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`format`]: Currency and rating formatting
//! - [`helpers`]: Shared text utilities (highlighting, truncation, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust,no_run
//! use vitrine::app::AppState;
//! use vitrine::ui::{format::PriceLocale, render, Theme};
//!
//! let state = AppState::new(Theme::default(), PriceLocale::PtBr);
//! render(&state, 24, 80); // Renders the loading screen to stdout
//! ```

pub mod components;
pub mod format;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use format::PriceLocale;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, EmptyState, FacetBarInfo, FooterInfo, HeaderInfo, NoticeInfo, NoticeKind,
    SearchBarInfo, TagChip, UIViewModel,
};
