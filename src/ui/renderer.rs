//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the `UIViewModel` from `AppState`, then
//! hand it to the layout that matches its content.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output positioned with cursor escapes. Does not clear
/// the screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Chooses a layout from the view model:
/// - Loading: centered message only
/// - Detail: the selected listing
/// - Otherwise: the result browser, which draws its own no-match message
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = vm.empty_state.as_ref().filter(|empty| empty.is_loading) {
        components::render_loading(vm, empty, theme, cols, rows);
        return;
    }

    if let Some(detail) = &vm.detail {
        components::render_detail_mode(vm, detail, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
