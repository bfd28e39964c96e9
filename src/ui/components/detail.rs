//! Detail view component renderer.

use crate::ui::helpers::{position_cursor, wrap_words};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const INDENT: &str = "  ";
const LABEL_WIDTH: usize = 10;

/// Renders every field of the detail listing starting at `row`.
///
/// The description wraps to the terminal width and stops at `last_row`.
/// Returns the row after the last line drawn.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current_row = row + 1;

    position_cursor(current_row, 1);
    print!("{INDENT}{}  ", detail.media);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.title);
    print!("{}", Theme::reset());
    current_row += 2;

    current_row = render_field(current_row, "Category", &detail.category, &theme.colors.text_normal);
    current_row = render_field(current_row, "Seller", &detail.seller, &theme.colors.text_normal);
    current_row = render_field(current_row, "Price", &detail.price, &theme.colors.price_fg);
    current_row = render_field(current_row, "Rating", &detail.rating, &theme.colors.rating_fg);
    current_row = render_field(current_row, "Tags", &detail.tags.join(", "), &theme.colors.text_dim);
    current_row += 1;

    let text_width = cols.saturating_sub(INDENT.len() * 2).max(1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    for line in wrap_words(&detail.description, text_width) {
        if current_row >= last_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{INDENT}{line}");
        current_row += 1;
    }
    print!("{}", Theme::reset());

    if current_row < last_row {
        current_row += 1;
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{INDENT}Cart: {} items", detail.cart_count);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_field(row: usize, label: &str, value: &str, color: &str) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{INDENT}{label:<LABEL_WIDTH$}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(color));
    print!("{value}");
    print!("{}", Theme::reset());
    row + 1
}
