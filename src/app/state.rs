//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for filtering, pagination, and UI view model generation.
//! It serves as the single source of truth for all transient view state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the loaded catalog) from derived state
//! (filtered records, current page, selection) to keep the two consistent.
//! Derived state is recomputed by `apply_filters()` after every mutation;
//! view models are computed on-demand from state snapshots.
//!
//! # State Components
//!
//! - **Catalog**: The full emoji collection fetched from the API
//! - **Filtered Records**: Subset after applying category and search filters
//! - **Current Page**: 1-based page index into the filtered records
//! - **Selection**: Cursor position within the visible page
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::AppState;
//! use zemoji::domain::Catalog;
//! use zemoji::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.replace_catalog(Catalog::from_records(vec![]));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::modes::{CategoryFilter, InputMode};
use crate::domain::{Catalog, EmojiRecord};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, PageBarInfo, PageEntry, SearchBarInfo,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fixed number of cards per page.
pub const PAGE_SIZE: usize = 10;

/// How many page numbers to show on each side of the current page in the bar.
const PAGE_BAR_RADIUS: usize = 2;

/// Central application state container.
///
/// Holds all transient view state including the loaded catalog, filters,
/// pagination, and mode information. Mutated by the event handler in response
/// to user input and system events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded emoji collection with derived category data.
    ///
    /// Empty until the first successful fetch; replaced wholesale on refresh.
    pub catalog: Catalog,

    /// Records matching the current category filter and search query.
    ///
    /// Recomputed by `apply_filters()` after state changes. Pages are sliced
    /// out of this vector.
    pub filtered: Vec<EmojiRecord>,

    /// Current category selector value.
    ///
    /// A `Category` value always names a category observed in the catalog;
    /// `replace_catalog()` resets stale selections to `All`.
    pub category: CategoryFilter,

    /// 1-based index of the current page.
    ///
    /// Bounded by the page bar range, which counts the unfiltered collection.
    pub current_page: usize,

    /// Zero-based cursor position within the visible page.
    ///
    /// Clamped by `apply_filters()`. Wraps around during navigation via
    /// `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and UI layout (search bar visibility,
    /// footer text). Changed by mode switching events.
    pub input_mode: InputMode,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// by `ExitSearch` and `Escape` events.
    pub search_query: String,

    /// Color scheme for UI rendering.
    ///
    /// Loaded from the plugin configuration on initialization.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with an empty catalog.
    ///
    /// The catalog stays empty until the first fetch completes; the UI shows
    /// the empty state in the meantime.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: Catalog::default(),
            filtered: vec![],
            category: CategoryFilter::All,
            current_page: 1,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
        }
    }

    /// Replaces the loaded catalog with a freshly fetched one.
    ///
    /// The category selector must name a value observed in the loaded
    /// collection; a selection that no longer exists falls back to `All`.
    /// The current page is clamped into the new page range and filters are
    /// reapplied.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        let _span = tracing::debug_span!("replace_catalog",
            record_count = catalog.records.len(),
            category_count = catalog.categories.len(),
        )
        .entered();

        if let CategoryFilter::Category(selected) = &self.category {
            if !catalog.has_category(selected) {
                tracing::debug!(category = %selected, "selected category gone from catalog, resetting to all");
                self.category = CategoryFilter::All;
            }
        }

        self.catalog = catalog;
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
        self.apply_filters();
    }

    /// Total number of page links.
    ///
    /// Counts the unfiltered collection, so a narrowed filter can leave
    /// trailing pages empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        (self.catalog.records.len() + PAGE_SIZE - 1) / PAGE_SIZE
    }

    /// Returns the slice of filtered records visible on the current page.
    ///
    /// The slice is `[(page-1)*10, page*10)` clamped to the filtered length,
    /// so it holds at most [`PAGE_SIZE`] items and may be empty past the end.
    #[must_use]
    pub fn visible_page(&self) -> &[EmojiRecord] {
        let start = (self.current_page - 1).saturating_mul(PAGE_SIZE);
        let end = start.saturating_add(PAGE_SIZE).min(self.filtered.len());
        if start >= self.filtered.len() {
            &[]
        } else {
            &self.filtered[start..end]
        }
    }

    /// Advances to the next page, if any.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            self.selected_index = 0;
        }
    }

    /// Goes back to the previous page, if any.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.selected_index = 0;
        }
    }

    /// Jumps to a specific 1-based page number, clamped to the page range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.selected_index = 0;
    }

    /// Selects the next category in the cycle `All -> c1 -> ... -> cN -> All`.
    ///
    /// Selecting a category resets the current page to 1.
    pub fn next_category(&mut self) {
        let next = match &self.category {
            CategoryFilter::All => self.catalog.categories.first().cloned(),
            CategoryFilter::Category(current) => {
                let pos = self.catalog.categories.iter().position(|c| c == current);
                pos.and_then(|p| self.catalog.categories.get(p + 1).cloned())
            }
        };
        self.select_category(next.map_or(CategoryFilter::All, CategoryFilter::Category));
    }

    /// Selects the previous category in the cycle.
    ///
    /// Selecting a category resets the current page to 1.
    pub fn prev_category(&mut self) {
        let prev = match &self.category {
            CategoryFilter::All => self.catalog.categories.last().cloned(),
            CategoryFilter::Category(current) => {
                match self.catalog.categories.iter().position(|c| c == current) {
                    Some(0) | None => None,
                    Some(p) => self.catalog.categories.get(p - 1).cloned(),
                }
            }
        };
        self.select_category(prev.map_or(CategoryFilter::All, CategoryFilter::Category));
    }

    /// Applies a category selector value and resets the page to 1.
    pub fn select_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category.label(), "category selected");
        self.category = category;
        self.current_page = 1;
        self.selected_index = 0;
        self.apply_filters();
    }

    /// Moves the card cursor down by one position, wrapping to the top.
    ///
    /// No-op if the visible page is empty.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_page().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the card cursor up by one position, wrapping to the bottom.
    ///
    /// No-op if the visible page is empty.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_page().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Applies the category filter and search query to the catalog.
    ///
    /// First filters by category, then fuzzy-matches every whitespace token of
    /// the search query against record names. Updates `filtered` and clamps
    /// the card cursor to the visible page.
    pub fn apply_filters(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!("apply_filters",
            total_records = self.catalog.records.len(),
            query_len = self.search_query.len(),
            category = %self.category.label(),
        )
        .entered();

        let tokens: Vec<String> = if self.search_query.is_empty() {
            vec![]
        } else {
            self.search_query
                .split_whitespace()
                .map(str::to_lowercase)
                .collect()
        };

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        self.filtered = self
            .catalog
            .records
            .iter()
            .filter(|record| {
                if !self.category.matches(record) {
                    return false;
                }

                matcher.as_ref().map_or(true, |m| {
                    let name_lower = record.name.to_lowercase();
                    tokens.iter().all(|token| m.fuzzy_match(&name_lower, token).is_some())
                })
            })
            .cloned()
            .collect();

        let page_len = self.visible_page().len();
        if page_len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(page_len - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "filters applied");
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Transforms application state into a structured representation optimized
    /// for rendering: card items with glyphs and highlight ranges, header and
    /// footer text, the page-number bar, and optional search bar or empty
    /// state.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        if self.catalog.is_empty() {
            return UIViewModel {
                cards: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                page_bar: PageBarInfo { entries: vec![] },
                empty_state: Some(EmptyState {
                    message: "No emoji loaded".to_string(),
                    subtitle: "Waiting for the emoji API, press r to retry".to_string(),
                }),
                search_bar: self.compute_search_bar(),
            };
        }

        let matcher = if matches!(self.input_mode, InputMode::Search(_)) && !self.search_query.is_empty() {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let available_rows = self.calculate_available_rows(rows);
        let cards: Vec<CardItem> = self
            .visible_page()
            .iter()
            .take(available_rows)
            .enumerate()
            .map(|(idx, record)| self.compute_card(record, idx, cols, matcher.as_ref()))
            .collect();

        UIViewModel {
            cards,
            selected_index: self.selected_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            page_bar: PageBarInfo {
                entries: page_bar_entries(self.total_pages(), self.current_page),
            },
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Computes a card item for a single record on the visible page.
    ///
    /// Handles glyph decoding, name truncation, group truncation to terminal
    /// width, fuzzy match highlighting, and selection state marking.
    fn compute_card(
        &self,
        record: &EmojiRecord,
        page_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> CardItem {
        const GLYPH_COLUMN_WIDTH: usize = 4;
        const NAME_COLUMN_WIDTH: usize = 32;
        const CATEGORY_COLUMN_WIDTH: usize = 24;
        const SAFETY_MARGIN: usize = 2;

        // Truncate by characters, not bytes, so multibyte names cannot
        // split a codepoint.
        let name = if record.name.chars().count() > NAME_COLUMN_WIDTH - 2 {
            let truncated: String = record.name.chars().take(NAME_COLUMN_WIDTH - 5).collect();
            format!("{truncated}...")
        } else {
            record.name.clone()
        };

        let max_group_width = cols
            .saturating_sub(GLYPH_COLUMN_WIDTH + NAME_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + SAFETY_MARGIN);
        let group = if record.group.len() > max_group_width {
            record.group.chars().take(max_group_width).collect()
        } else {
            record.group.clone()
        };

        let highlight_ranges =
            matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&record.name, m));

        CardItem {
            glyph: record.glyph(),
            name,
            category: record.category.clone(),
            group,
            is_selected: page_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Uses the Skim fuzzy matcher to find matching character positions, then
    /// coalesces consecutive indices into `(start, end)` ranges (exclusive end).
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        if let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search_query) {
            let mut ranges = Vec::new();
            let mut start = None;
            let mut prev = None;

            for &idx in &indices {
                match (start, prev) {
                    (None, _) => {
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    (Some(_), Some(p)) if idx == p + 1 => {
                        prev = Some(idx);
                    }
                    (Some(s), Some(p)) => {
                        ranges.push((s, p + 1));
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    _ => {}
                }
            }

            if let (Some(s), Some(p)) = (start, prev) {
                ranges.push((s, p + 1));
            }

            ranges
        } else {
            vec![]
        }
    }

    /// Computes header information for the current filter state.
    fn compute_header(&self) -> HeaderInfo {
        let title = if self.catalog.is_empty() {
            " Emoji List ".to_string()
        } else {
            format!(
                " Emoji List [{}] {}/{} · refreshed {} ",
                self.category.label(),
                self.filtered.len(),
                self.catalog.records.len(),
                self.catalog.refreshed_ago(),
            )
        };
        HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: cards  h/l: pages  Ctrl+n/p: navigate".to_string()
            }
            InputMode::Normal => {
                "j/k: cards  h/l: pages  Tab/c/C: category  a: all  /: search  r: refresh  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for cards after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, column captions,
    /// page bar, footer, and the search box (3 rows) when active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}

/// Builds the page-number bar entries for `total` pages with `current` active.
///
/// Small page counts list every page. Larger counts show the first and last
/// page plus a window around the current page, with gaps in between:
/// `1 .. 41 42 [43] 44 45 .. 180`.
#[must_use]
pub fn page_bar_entries(total: usize, current: usize) -> Vec<PageEntry> {
    if total == 0 {
        return vec![];
    }

    let window_start = current.saturating_sub(PAGE_BAR_RADIUS).max(1);
    let window_end = (current + PAGE_BAR_RADIUS).min(total);

    // Everything fits without gaps.
    if total <= 2 * PAGE_BAR_RADIUS + 5 {
        return (1..=total)
            .map(|page| PageEntry::Number {
                page,
                is_current: page == current,
            })
            .collect();
    }

    let mut entries = Vec::new();

    if window_start > 1 {
        entries.push(PageEntry::Number {
            page: 1,
            is_current: current == 1,
        });
        if window_start > 2 {
            entries.push(PageEntry::Gap);
        }
    }

    for page in window_start..=window_end {
        entries.push(PageEntry::Number {
            page,
            is_current: page == current,
        });
    }

    if window_end < total {
        if window_end < total - 1 {
            entries.push(PageEntry::Gap);
        }
        entries.push(PageEntry::Number {
            page: total,
            is_current: current == total,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> EmojiRecord {
        EmojiRecord {
            name: name.to_string(),
            category: category.to_string(),
            group: format!("{category} group"),
            html_code: "&#128512;".to_string(),
        }
    }

    fn sample_records(count: usize) -> Vec<EmojiRecord> {
        (0..count)
            .map(|i| {
                let category = if i % 2 == 0 { "smileys and people" } else { "flags" };
                record(&format!("emoji {i}"), category)
            })
            .collect()
    }

    fn loaded_state(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.replace_catalog(Catalog::from_records(sample_records(count)));
        state
    }

    #[test]
    fn selecting_all_restores_full_filtered_set() {
        let mut state = loaded_state(25);
        state.select_category(CategoryFilter::Category("flags".to_string()));
        assert!(state.filtered.len() < 25);

        state.select_category(CategoryFilter::All);
        assert_eq!(state.filtered.len(), 25);
    }

    #[test]
    fn category_filter_yields_only_matching_records() {
        let mut state = loaded_state(25);
        state.select_category(CategoryFilter::Category("flags".to_string()));

        assert!(!state.filtered.is_empty());
        assert!(state.filtered.iter().all(|r| r.category == "flags"));
    }

    #[test]
    fn selecting_category_resets_page_to_one() {
        let mut state = loaded_state(45);
        state.go_to_page(4);
        assert_eq!(state.current_page, 4);

        state.select_category(CategoryFilter::Category("flags".to_string()));
        assert_eq!(state.current_page, 1);

        // Re-selecting via the cycle also resets.
        state.go_to_page(2);
        state.next_category();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn pages_are_contiguous_and_non_overlapping() {
        let state25 = {
            let mut s = loaded_state(25);
            s.go_to_page(1);
            s
        };
        assert_eq!(state25.visible_page().len(), 10);

        let mut seen = Vec::new();
        let mut state = loaded_state(25);
        for page in 1..=state.total_pages() {
            state.go_to_page(page);
            let slice = state.visible_page();
            assert!(slice.len() <= PAGE_SIZE);
            seen.extend(slice.iter().map(|r| r.name.clone()));
        }

        let expected: Vec<String> = (0..25).map(|i| format!("emoji {i}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut state = loaded_state(25);
        state.go_to_page(3);
        assert_eq!(state.visible_page().len(), 5);
    }

    #[test]
    fn page_links_count_the_unfiltered_collection() {
        let mut state = loaded_state(40);
        state.select_category(CategoryFilter::Category("flags".to_string()));
        assert_eq!(state.filtered.len(), 20);

        // Still 4 page links even though the filter fits in 2 pages.
        assert_eq!(state.total_pages(), 4);

        // Navigating past the filtered records shows an empty page.
        state.go_to_page(4);
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn page_navigation_clamps_to_range() {
        let mut state = loaded_state(25);
        state.prev_page();
        assert_eq!(state.current_page, 1);

        state.go_to_page(3);
        state.next_page();
        assert_eq!(state.current_page, 3);

        state.go_to_page(99);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn selection_wraps_within_visible_page() {
        let mut state = loaded_state(12);
        state.go_to_page(2); // 2 records on this page

        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn search_query_narrows_by_name() {
        let mut state = loaded_state(25);
        state.search_query = "emoji 1".to_string();
        state.apply_filters();

        assert!(!state.filtered.is_empty());
        assert!(state.filtered.len() < 25);
    }

    #[test]
    fn stale_category_resets_to_all_on_catalog_replacement() {
        let mut state = loaded_state(25);
        state.select_category(CategoryFilter::Category("flags".to_string()));

        state.replace_catalog(Catalog::from_records(vec![record("solo", "food and drink")]));
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn category_cycle_visits_all_and_wraps() {
        let mut state = loaded_state(4); // two categories
        assert_eq!(state.category, CategoryFilter::All);

        state.next_category();
        assert_eq!(state.category, CategoryFilter::Category("smileys and people".to_string()));
        state.next_category();
        assert_eq!(state.category, CategoryFilter::Category("flags".to_string()));
        state.next_category();
        assert_eq!(state.category, CategoryFilter::All);

        state.prev_category();
        assert_eq!(state.category, CategoryFilter::Category("flags".to_string()));
    }

    #[test]
    fn page_bar_lists_every_page_when_short() {
        let entries = page_bar_entries(4, 2);
        assert_eq!(entries.len(), 4);
        assert!(matches!(entries[1], PageEntry::Number { page: 2, is_current: true }));
        assert!(!entries.iter().any(|e| matches!(e, PageEntry::Gap)));
    }

    #[test]
    fn page_bar_windows_large_page_counts() {
        let entries = page_bar_entries(180, 43);

        assert!(matches!(entries.first(), Some(PageEntry::Number { page: 1, .. })));
        assert!(matches!(entries.last(), Some(PageEntry::Number { page: 180, .. })));
        assert_eq!(entries.iter().filter(|e| matches!(e, PageEntry::Gap)).count(), 2);
        assert!(entries
            .iter()
            .any(|e| matches!(e, PageEntry::Number { page: 43, is_current: true })));
    }

    #[test]
    fn empty_catalog_viewmodel_shows_empty_state() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.page_bar.entries.is_empty());
    }

    #[test]
    fn viewmodel_renders_visible_page_as_cards() {
        let state = loaded_state(25);
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.cards.len(), 10);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.cards[0].glyph, "😀");
        assert!(vm.cards[0].is_selected);
        assert!(!vm.cards[1].is_selected);
    }

    #[test]
    fn long_multibyte_names_truncate_on_character_boundaries() {
        let mut state = AppState::new(Theme::default());
        let long_name = "é".repeat(40);
        state.replace_catalog(Catalog::from_records(vec![record(&long_name, "flags")]));

        let vm = state.compute_viewmodel(24, 80);

        let name = &vm.cards[0].name;
        assert!(name.ends_with("..."));
        assert_eq!(name.chars().count(), 30);
        assert!(name.trim_end_matches("...").chars().all(|c| c == 'é'));
    }
}
