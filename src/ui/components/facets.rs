//! Facet bar component renderer.
//!
//! Two lines under the header: the category and sort selection, then the
//! numbered tag chips.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FacetBarInfo;

/// Renders the facet bar at `row` and returns the row after it.
///
/// # Layout
///
/// ```text
///  Category: Streaming (c/C)   Sort: Lowest price (o)
///  [1 entrega-imediata] [2 4k] [3 garantia] [4 perfil-privado]
/// ```
///
/// Active chips use `tag_active_fg` on `tag_active_bg`.
pub fn render_facet_bar(row: usize, facets: &FacetBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let selection = format!(
        " Category: {} (c/C)   Sort: {} (o)",
        facets.category, facets.sort
    );
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{selection}");
    print!("{}", " ".repeat(cols.saturating_sub(selection.chars().count())));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    let mut used = 0;
    for chip in &facets.tags {
        let label = format!("[{} {}]", chip.key, chip.label);
        let width = label.chars().count() + 1;
        if used + width > cols {
            break;
        }

        print!(" ");
        if chip.is_active {
            print!("{}", Theme::fg(&theme.colors.tag_active_fg));
            print!("{}", Theme::bg(&theme.colors.tag_active_bg));
            print!("{}", Theme::bold());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += width;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    row + 2
}
