//! Header bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at the specified row.
///
/// The title shows the active category filter, the visible and total record
/// counts, and when the catalog was last refreshed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header.title);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a horizontal border line across the full width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(row: usize, cols: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}
