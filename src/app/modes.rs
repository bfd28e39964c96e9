//! Input mode state types for the application.
//!
//! The input mode decides which keybindings are active and which layout the
//! renderer draws.
//!
//! # State Machine
//!
//! ```text
//! Normal ──/──▶ Search(Typing) ──Enter──▶ Search(Navigating)
//!   ▲  │             │  ▲                       │
//!   │  │            Esc └──────────/────────────┘
//!   │  Enter          │
//!   │  ▼              ▼
//!   └─Esc── Detail ◀─Enter (from Navigating)
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open details, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the result table.
    ///
    /// Keybindings: j/k (navigate), / (search), enter (details), c/C (category),
    /// o (sort), 1-9 (tags), x (clear filters), q (quit).
    Normal,

    /// Editing or navigating a search.
    Search(SearchFocus),

    /// Detail view of the selected listing.
    ///
    /// Keybindings: b (simulate purchase), a (add to cart), esc/q (close).
    Detail,
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
