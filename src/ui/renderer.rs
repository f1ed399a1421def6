//! Top level screen renderer.
//!
//! Composes the component renderers into full screen layouts for normal
//! and search modes. All drawing goes through ANSI cursor positioning so
//! the plugin never clears more than it repaints.

use crate::app::{AppState, InputMode, SearchFocus};
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the complete plugin screen for the current state.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(state, &viewmodel, rows, cols);
}

fn render_viewmodel(state: &AppState, viewmodel: &UIViewModel, rows: usize, cols: usize) {
    let theme = &state.theme;

    let mut row = 2;
    row = components::render_header(row, &viewmodel.header, theme);
    row = components::render_border(row, cols, theme);

    if let InputMode::Search(focus) = &state.input_mode {
        if let Some(search_bar) = &viewmodel.search_bar {
            let focused = matches!(focus, SearchFocus::Typing);
            row = components::render_search_bar(row, search_bar, theme, cols, focused);
        }
    }

    if let Some(empty) = &viewmodel.empty_state {
        components::render_empty_state(empty, theme, rows, cols);
    } else {
        row = components::render_card_headers(row, theme);
        components::render_cards(row, &viewmodel.cards, theme, cols);
    }

    components::render_page_bar(rows.saturating_sub(2), &viewmodel.page_bar, theme, cols);
    components::render_border(rows.saturating_sub(1), cols, theme);
    components::render_footer(rows, &viewmodel.footer, theme);
}
