//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning and fuzzy match highlighting with proper
//! ANSI escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is suppressed on selected cards so it does
/// not clash with the selection background.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the card is currently selected
///
/// Ranges use character indices, not byte indices; the text is converted to a
/// character vector for indexing.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Visual width of a string in terminal cells, approximated as one cell per
/// character with two cells for characters outside the basic multilingual
/// plane (emoji glyphs).
///
/// Good enough for column alignment of emoji cards; combining sequences may
/// still drift by a cell on some terminals.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    text.chars()
        .map(|c| if (c as u32) > 0xFFFF || is_wide_symbol(c) { 2 } else { 1 })
        .sum()
}

/// Returns `true` for BMP symbols that terminals typically render double-width.
const fn is_wide_symbol(c: char) -> bool {
    matches!(c as u32, 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x3000..=0x303F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_width_counts_emoji_as_two_cells() {
        assert_eq!(visual_width("abc"), 3);
        assert_eq!(visual_width("😀"), 2);
        assert_eq!(visual_width("✌"), 2);
        assert_eq!(visual_width("a😀"), 3);
    }
}
