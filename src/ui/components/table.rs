//! Table component renderer.
//!
//! Renders the result list as fixed-width columns: title, category, price,
//! rating, and seller. The seller column takes the remaining width.

use crate::ui::helpers::{self, pad_left, pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

pub const TITLE_WIDTH: usize = 36;
pub const CATEGORY_WIDTH: usize = 10;
pub const PRICE_WIDTH: usize = 12;
pub const RATING_WIDTH: usize = 6;

/// Width of the selection marker column.
const MARKER_WIDTH: usize = 2;

/// Renders the column headers and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{} {} {} {} {}",
        " ".repeat(MARKER_WIDTH),
        pad_right("TITLE", TITLE_WIDTH),
        pad_right("CATEGORY", CATEGORY_WIDTH),
        pad_left("PRICE", PRICE_WIDTH),
        pad_left("RATING", RATING_WIDTH),
        "SELLER"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row and returns the row after the last one.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one listing row.
///
/// # Styling Precedence
///
/// 1. Selection colors for the whole row (if `is_selected`)
/// 2. Search highlights in the title (unless selected)
/// 3. Column colors: price and rating use their theme colors
///
/// The row is padded to the terminal width so the selection background spans
/// the full line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));

    print!("{}", if item.is_selected { "▸ " } else { "  " });

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{}", Theme::fg(base_fg));
    print!("{} ", " ".repeat(TITLE_WIDTH.saturating_sub(item.title.chars().count())));

    print!("{} ", pad_right(&item.category, CATEGORY_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{} ", pad_left(&item.price, PRICE_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{} ", pad_left(&item.rating, RATING_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.seller);

    let line_len = MARKER_WIDTH + TITLE_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH + RATING_WIDTH + 4
        + item.seller.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
