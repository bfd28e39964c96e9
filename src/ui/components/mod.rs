//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at an explicit row and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with result count and cart size
//! - [`facets`]: Category, sort, and numbered tag chips
//! - [`search`]: Search input box
//! - [`table`]: Result list columns (TITLE, CATEGORY, PRICE, RATING, SELLER)
//! - [`detail`]: All fields of one listing
//! - [`empty`]: Loading and no-match messages
//! - [`notice`]: Status line for purchases, cart additions, and errors
//! - [`footer`]: Keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_loading`]: Header + centered message + Footer
//! - [`render_browse_mode`]: Header + Facets + optional Search + Table + Footer
//! - [`render_detail_mode`]: Header + Detail + Footer

mod detail;
mod empty;
mod facets;
mod footer;
mod header;
mod notice;
mod search;
pub mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, EmptyState, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use facets::render_facet_bar;
use footer::render_footer;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the notice, bottom border, and footer anchored to the last rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(notice) = &vm.notice {
        render_notice(border_row.saturating_sub(1), notice, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the loading screen shown before the catalog arrives.
pub fn render_loading(vm: &UIViewModel, empty: &EmptyState, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    render_empty_state(6, empty, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Renders the result browser.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Facet bar - 2 lines]
/// [Search Bar - 3 lines, optional]
/// [Table Headers]
/// [Table Rows, or the no-match message]
/// [Notice, optional]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(facets) = &vm.facets {
        current_row = render_facet_bar(current_row, facets, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, theme);

    match &vm.empty_state {
        Some(empty) => render_empty_state(current_row + 1, empty, theme, cols),
        None => {
            render_table_rows(current_row, &vm.display_items, theme, cols);
        }
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail view of one listing.
pub fn render_detail_mode(vm: &UIViewModel, detail: &DetailView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_detail(current_row, detail, theme, cols, rows.saturating_sub(3));

    render_bottom(vm, theme, cols, rows);
}
