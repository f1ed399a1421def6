//! Page number bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageBarInfo, PageEntry};

/// Renders the page number bar centered at the specified row.
///
/// Each entry is either a page number (the current one highlighted with the
/// accent color) or a gap marker for elided page ranges.
pub fn render_page_bar(row: usize, page_bar: &PageBarInfo, theme: &Theme, cols: usize) {
    if page_bar.entries.is_empty() {
        return;
    }

    let width: usize = page_bar
        .entries
        .iter()
        .map(|entry| entry_label(entry).len() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    let start_col = (cols.saturating_sub(width) / 2).max(1);

    position_cursor(row, start_col);
    for (i, entry) in page_bar.entries.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        match entry {
            PageEntry::Number { is_current, .. } if *is_current => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.accent_fg));
                print!("{}", entry_label(entry));
                print!("{}", Theme::reset());
            }
            PageEntry::Number { .. } => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("{}", entry_label(entry));
                print!("{}", Theme::reset());
            }
            PageEntry::Gap => {
                print!("{}", Theme::dim());
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("{}", entry_label(entry));
                print!("{}", Theme::reset());
            }
        }
    }
}

fn entry_label(entry: &PageEntry) -> String {
    match entry {
        PageEntry::Number { page, is_current } if *is_current => format!("[{page}]"),
        PageEntry::Number { page, .. } => format!("{page}"),
        PageEntry::Gap => "…".to_string(),
    }
}
