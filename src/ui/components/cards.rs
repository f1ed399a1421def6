//! Card list component renderer.
//!
//! This module renders the emoji cards on the current page as rows with
//! GLYPH, NAME, CATEGORY, and GROUP columns. It supports selection
//! highlighting and fuzzy match highlighting on the name column.

use crate::ui::helpers::{self, position_cursor, visual_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Glyph column width in cells.
const GLYPH_COLUMN_WIDTH: usize = 4;

/// Name column width in cells.
const NAME_COLUMN_WIDTH: usize = 32;

/// Category column width in cells.
const CATEGORY_COLUMN_WIDTH: usize = 24;

/// Renders the card column captions at the specified row.
///
/// Displays "NAME", "CATEGORY" and "GROUP" captions with bold styling and
/// theme colors; the glyph column is left uncaptioned.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_card_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:glyph$}{:name$}{:category$}{}",
        "",
        "NAME",
        "CATEGORY",
        "GROUP",
        glyph = GLYPH_COLUMN_WIDTH,
        name = NAME_COLUMN_WIDTH,
        category = CATEGORY_COLUMN_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all cards starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single emoji card at the specified row position.
///
/// Displays one record with:
/// - GLYPH column (4 cells, accent colored)
/// - NAME column (32 cells, left-aligned, fuzzy highlights)
/// - CATEGORY column (24 cells, left-aligned)
/// - GROUP column (remaining width)
/// - Selection highlighting (full row background)
///
/// The row is padded to fill the entire terminal width so the selection
/// background renders consistently.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Fuzzy match highlights on the name (unless selected)
/// 3. Normal text color
fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{}", card.glyph);
    let glyph_pad = GLYPH_COLUMN_WIDTH.saturating_sub(visual_width(&card.glyph));
    print!("{}", " ".repeat(glyph_pad));
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if card.highlight_ranges.is_empty() {
        print!("{}", card.name);
    } else {
        helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
        // Highlight sections end with a full reset.
        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    }
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(card.name.len())));

    print!("{}", card.category);
    print!(
        "{}",
        " ".repeat(CATEGORY_COLUMN_WIDTH.saturating_sub(card.category.len()))
    );

    print!("{}", card.group);

    let line_len = GLYPH_COLUMN_WIDTH + NAME_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + card.group.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
