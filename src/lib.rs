//! Vitrine: a Zellij plugin for browsing a subscription marketplace catalog.
//!
//! Vitrine renders a listing catalog inside a Zellij pane and provides:
//! - Case-insensitive search over listing names and descriptions
//! - Category and tag facets derived from the loaded catalog
//! - Relevance, price ascending/descending, and rating sort orders
//! - A detail view with simulated purchase and an in-memory cart
//! - Asynchronous catalog loading via a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and action dispatching            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Source      │   │ - Async load  │
//! │ - Theming     │   │ - Facets      │   │ - IPC bridge  │
//! │ - Formatting  │   │ - Engine      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Listings, query state, cart, errors (domain/)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/vitrine.wasm" {
//!         theme "catppuccin-mocha"
//!         locale "pt-BR"
//!         load_latency_ms "350"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build `AppState`, subscribe to events, post `LoadCatalog` to the worker
//! 2. **Worker**: wait out the simulated latency, answer with `CatalogLoaded`
//! 3. **Install**: validate listings into a `CatalogStore`, derive facets,
//!    evaluate the default query
//! 4. **UI Rendering**: compute the view model and draw the components
//!
//! # Example
//!
//! ```rust
//! use vitrine::catalog::MockCatalogSource;
//! use vitrine::worker::WorkerResponse;
//! use vitrine::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let response = WorkerResponse::CatalogLoaded {
//!     listings: MockCatalogSource::sample_listings(),
//! };
//! let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(response))?;
//! assert!(matches!(actions[0], Action::FacetsReady { .. }));
//!
//! let (_, actions) = handle_event(&mut state, &Event::SetSearchText("netflix".to_string()))?;
//! assert_eq!(actions, vec![Action::ResultsChanged { ids: vec!["netflix-premium".to_string()] }]);
//! # Ok::<(), vitrine::VitrineError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any 24-bit color ANSI terminal

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Listing, Result, VitrineError};
pub use ui::{PriceLocale, Theme};

use crate::catalog::DEFAULT_LATENCY_MS;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/vitrine.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/vitrine/theme.toml"
///     locale "en-US"
///     load_latency_ms "0"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Used when `theme_file` is unset or fails to load.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Simulated catalog fetch latency. Default: 350 ms
    pub load_latency_ms: u64,

    /// Price display locale. Default: `pt-BR`
    pub locale: PriceLocale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            load_latency_ms: DEFAULT_LATENCY_MS,
            locale: PriceLocale::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`, `trace_level`: copied as-is
    /// - `load_latency_ms`: String → `u64` (falls back to 350 on parse error)
    /// - `locale`: BCP 47 tag (falls back to `pt-BR` if unsupported)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use vitrine::{Config, PriceLocale};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("locale".to_string(), "en-US".to_string());
    /// map.insert("load_latency_ms".to_string(), "0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.locale, PriceLocale::EnUs);
    /// assert_eq!(config.load_latency_ms, 0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let load_latency_ms = config.get("load_latency_ms").map_or(DEFAULT_LATENCY_MS, |raw| {
            raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid load_latency_ms, using default");
                DEFAULT_LATENCY_MS
            })
        });

        let locale = config.get("locale").map_or_else(PriceLocale::default, |tag| {
            PriceLocale::from_tag(tag).unwrap_or_else(|| {
                tracing::warn!(locale = %tag, "unsupported locale, using pt-BR");
                PriceLocale::default()
            })
        });

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            load_latency_ms,
            locale,
        }
    }
}

/// Builds the initial `AppState`: theme from file, then name, then default.
///
/// The catalog starts unloaded; the plugin requests it from the worker.
///
/// # Example
///
/// ```rust
/// use vitrine::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!(!state.is_loaded());
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing vitrine plugin");

    let theme_from_name = || {
        config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    };

    let theme = config.theme_file.as_ref().map_or_else(theme_from_name, |theme_file| {
        let path = infrastructure::expand_tilde(theme_file);
        Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, trying theme name");
            theme_from_name()
        })
    });

    AppState::new(theme, config.locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[("load_latency_ms", "soon"), ("locale", "fr-FR")]));
        assert_eq!(config.load_latency_ms, DEFAULT_LATENCY_MS);
        assert_eq!(config.locale, PriceLocale::PtBr);
    }

    #[test]
    fn theme_keys_are_copied() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-frappe"), ("trace_level", "debug")]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn missing_theme_file_falls_back_to_theme_name() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }

    #[test]
    fn missing_theme_file_without_name_uses_default_theme() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
