//! Search bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the boxed search input at the specified row.
///
/// Draws a three row bordered box containing the current query and a block
/// cursor. The border uses the search accent color while the bar has focus.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    focused: bool,
) -> usize {
    let border_color = if focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };
    let inner_width = cols.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(row + 1, 1);
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" / {}", search.query);
    if focused {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("█");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    let cursor_cell = usize::from(focused);
    let used = 3 + search.query.len() + cursor_cell;
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border_color));
    print!("│");

    position_cursor(row + 2, 1);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
