//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like decoded glyphs, highlight
//! ranges, and selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the cards
/// on the current page, selection state, header/footer text, the page-number
/// bar, and optional UI elements like the search bar and empty state.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Cards on the visible page, in display order.
    pub cards: Vec<CardItem>,

    /// Index of the currently selected card within `cards`.
    pub selected_index: usize,

    /// Header information (title, filter summary).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Page-number bar entries.
    pub page_bar: PageBarInfo,

    /// Optional empty state message (when nothing has been loaded).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single emoji card.
///
/// Represents one row in the card list. The glyph is already decoded from the
/// record's HTML markup, and highlight ranges are pre-computed for fuzzy
/// match rendering.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Decoded emoji glyph, or a replacement character if undecodable.
    pub glyph: String,

    /// Emoji name, truncated to the name column width.
    pub name: String,

    /// Category classification.
    pub category: String,

    /// Group classification, truncated to the remaining terminal width.
    pub group: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges to highlight (for fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: cards  h/l: pages  q: quit").
    pub keybindings: String,
}

/// One slot in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A navigable page-number link.
    Number {
        /// 1-based page number.
        page: usize,
        /// Whether this is the current page.
        is_current: bool,
    },

    /// A gap between the windowed page numbers and the first/last page.
    Gap,
}

/// Page-number bar display information.
///
/// Entries are pre-windowed around the current page; large collections show
/// first page, a window, and last page with gaps in between.
#[derive(Debug, Clone)]
pub struct PageBarInfo {
    /// Bar slots in display order. Empty when nothing is loaded.
    pub entries: Vec<PageEntry>,
}

/// Empty state message display information.
///
/// Shown when no records are available (catalog not yet fetched, or the
/// fetch failed).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No emoji loaded").
    pub message: String,

    /// Secondary explanatory text (e.g., "Waiting for the emoji API").
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
