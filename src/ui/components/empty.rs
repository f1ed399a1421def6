//! Empty state renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered on the screen.
///
/// Shown when the catalog has not loaded yet or when the active filters
/// leave the current page without any records.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    let center_row = rows / 2;

    let message_col = (cols.saturating_sub(empty.message.len()) / 2).max(1);
    position_cursor(center_row, message_col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    let subtitle_col = (cols.saturating_sub(empty.subtitle.len()) / 2).max(1);
    position_cursor(center_row + 2, subtitle_col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
