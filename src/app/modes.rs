//! Input mode and category filter state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and the category selector. These types determine which keybindings are
//! active, how input is processed, and which records are displayed.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! The category filter controls which records are visible:
//! - **All**: The entire collection
//! - **Category(c)**: Only records whose category equals `c`
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::{CategoryFilter, InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! let filter = CategoryFilter::All;
//! ```

use crate::domain::EmojiRecord;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered cards are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered cards.
    ///
    /// Accepts j/k for movement, h/l for pages, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (cards), h/l (pages), Tab/c/C (category),
    /// a (all categories), / (search), r (refresh), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is typing
    /// or navigating results. Footer displays search-specific keybindings.
    Search(SearchFocus),
}

/// Category selector value determining which records are displayed.
///
/// Invariant: a `Category` value must be one of the categories observed in the
/// loaded collection. The handler validates this whenever the catalog is
/// replaced, falling back to `All` for stale selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The entire collection is visible.
    #[default]
    All,

    /// Only records whose category equals the contained value are visible.
    Category(String),
}

impl CategoryFilter {
    /// Returns `true` if the record passes this filter.
    #[must_use]
    pub fn matches(&self, record: &EmojiRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &record.category == category,
        }
    }

    /// Returns the selector label shown in the header.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }
}
