//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch results, and worker responses, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`
//! - **Filtering**: `NextCategory`, `PrevCategory`, `AllCategories`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **System**: `CatalogFetched`, `FetchFailed`, `Refresh`
//! - **Worker**: `WorkerResponse` with typed message variants

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, fetch completion, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the card cursor up by one position (wraps to bottom).
    KeyUp,
    /// Advances to the next page link.
    NextPage,
    /// Goes back to the previous page link.
    PrevPage,
    /// Selects the next category in the selector cycle.
    NextCategory,
    /// Selects the previous category in the selector cycle.
    PrevCategory,
    /// Resets the category selector to "all".
    AllCategories,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Re-issues the catalog fetch.
    Refresh,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the filtered cards (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Reports a completed catalog request.
    ///
    /// Delivered by the host when the web request finishes. A 2xx status hands
    /// the body to the worker for parsing; anything else is logged and the UI
    /// stays empty.
    CatalogFetched {
        /// HTTP status code of the response.
        status: u16,
        /// Response body decoded as UTF-8.
        body: String,
    },

    /// Reports a catalog request that never produced a response.
    ///
    /// Logged but does not affect application state. The user can retry with
    /// the refresh key.
    FetchFailed {
        /// Error message describing the failure.
        error: String,
    },

    /// Wraps a response from the background worker thread.
    ///
    /// Processed by matching on the inner [`WorkerResponse`] variant. May
    /// replace the catalog or surface a parse error.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. `should_render` is `true` when the
/// event changed anything visible; the action vector may be empty if the event
/// requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. The plugin shim logs and drops
/// them; no failure here is fatal.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.prev_page();
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            state.next_category();
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            state.prev_category();
            Ok((true, vec![]))
        }
        Event::AllCategories => {
            state.select_category(super::modes::CategoryFilter::All);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Refresh => {
            tracing::debug!("manual catalog refresh requested");
            Ok((false, vec![Action::FetchCatalog]))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.current_page = 1;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filters();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.current_page = 1;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::{InputMode, SearchFocus};

            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            state.current_page = 1;

            tracing::trace!(query = %state.search_query, char = %c, "search query updated");

            state.apply_filters();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::{InputMode, SearchFocus};
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.current_page = 1;

            state.apply_filters();

            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;

            state.search_query = String::new();
            state.current_page = 1;

            state.apply_filters();

            Ok((true, vec![]))
        }
        Event::CatalogFetched { status, body } => {
            if (200..300).contains(status) {
                tracing::debug!(status = status, body_len = body.len(), "catalog fetched");
                Ok((
                    false,
                    vec![Action::PostToWorker(WorkerMessage::parse_catalog(body.clone()))],
                ))
            } else {
                tracing::error!(status = status, "catalog request returned error status");
                Ok((false, vec![]))
            }
        }
        Event::FetchFailed { error } => {
            tracing::error!(error = %error, "catalog request failed");
            Ok((false, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogParsed { records } => {
                tracing::debug!(record_count = records.len(), "catalog parsed by worker");
                state.replace_catalog(crate::domain::Catalog::from_records(records.clone()));
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{CategoryFilter, InputMode, SearchFocus};
    use crate::domain::EmojiRecord;
    use crate::ui::theme::Theme;

    fn record(name: &str, category: &str) -> EmojiRecord {
        EmojiRecord {
            name: name.to_string(),
            category: category.to_string(),
            group: category.to_string(),
            html_code: "&#128512;".to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        let records: Vec<EmojiRecord> = (0..30)
            .map(|i| {
                let category = if i < 15 { "flags" } else { "food and drink" };
                record(&format!("emoji {i}"), category)
            })
            .collect();
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogParsed { records }),
        )
        .unwrap();
        assert!(actions.is_empty());
        state
    }

    #[test]
    fn parsed_catalog_replaces_state() {
        let state = loaded_state();
        assert_eq!(state.catalog.records.len(), 30);
        assert_eq!(state.filtered.len(), 30);
        assert_eq!(state.catalog.categories, vec!["flags", "food and drink"]);
    }

    #[test]
    fn successful_fetch_hands_body_to_worker() {
        let mut state = AppState::new(Theme::default());
        let (should_render, actions) = handle_event(
            &mut state,
            &Event::CatalogFetched {
                status: 200,
                body: "[]".to_string(),
            },
        )
        .unwrap();

        assert!(!should_render);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::ParseCatalog { .. })
        ));
    }

    #[test]
    fn error_status_is_logged_without_state_change() {
        let mut state = AppState::new(Theme::default());
        let (should_render, actions) = handle_event(
            &mut state,
            &Event::CatalogFetched {
                status: 503,
                body: String::new(),
            },
        )
        .unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn fetch_failure_leaves_ui_empty() {
        let mut state = AppState::new(Theme::default());
        let (should_render, actions) = handle_event(
            &mut state,
            &Event::FetchFailed {
                error: "connection refused".to_string(),
            },
        )
        .unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn category_events_reset_page() {
        let mut state = loaded_state();
        state.go_to_page(3);

        handle_event(&mut state, &Event::NextCategory).unwrap();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.category, CategoryFilter::Category("flags".to_string()));

        state.go_to_page(2);
        handle_event(&mut state, &Event::AllCategories).unwrap();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn refresh_emits_fetch_action() {
        let mut state = loaded_state();
        let (should_render, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(!should_render);
        assert_eq!(actions, vec![Action::FetchCatalog]);
    }

    #[test]
    fn search_typing_narrows_and_resets_page() {
        let mut state = loaded_state();
        state.go_to_page(2);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
        assert_eq!(state.current_page, 1);

        state.go_to_page(2);
        handle_event(&mut state, &Event::Char('2')).unwrap();
        assert_eq!(state.current_page, 1);
        assert!(state.filtered.len() < 30);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 30);
    }

    #[test]
    fn navigating_focus_keeps_query_and_navigates() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('e')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        // Letters no longer edit the query once focus moves to the cards.
        let (should_render, _) = handle_event(&mut state, &Event::Char('j')).unwrap();
        assert!(!should_render);
        assert_eq!(state.search_query, "e");

        let (should_render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!should_render);
        assert_eq!(state.search_query, "e");

        // Navigation events still move the cursor and pages.
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_index, 1);
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn chars_outside_search_mode_are_ignored() {
        let mut state = loaded_state();
        let (should_render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!should_render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn page_navigation_events_move_within_bounds() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.current_page, 2);
        handle_event(&mut state, &Event::PrevPage).unwrap();
        handle_event(&mut state, &Event::PrevPage).unwrap();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn worker_parse_error_keeps_state() {
        let mut state = loaded_state();
        let (should_render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "expected value at line 1".to_string(),
            }),
        )
        .unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.catalog.records.len(), 30);
    }
}
