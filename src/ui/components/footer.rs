//! Footer keybinding hint renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer keybinding hints at the bottom of the screen.
///
/// The hint string is mode-sensitive and computed by the viewmodel.
pub fn render_footer(rows: usize, footer: &FooterInfo, theme: &Theme) {
    position_cursor(rows, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {}", footer.keybindings);
    print!("{}", Theme::reset());
}
