//! Status notice renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NoticeInfo, NoticeKind};

/// Renders a one-line notice at `row`, colored by its kind.
pub fn render_notice(row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) {
    let color = match notice.kind {
        NoticeKind::Success => &theme.colors.notice_fg,
        NoticeKind::Error => &theme.colors.error_fg,
    };
    let text = truncate(&format!(" {}", notice.message), cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(text.chars().count())));
    print!("{}", Theme::reset());
}
