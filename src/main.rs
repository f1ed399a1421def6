//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zemoji library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background processing:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   ZemojiWorker   │   │  ← Background processing
//! │  │ (worker thread)  │   │  ← Catalog JSON parsing
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `WebRequestResult` events
//! 3. **Permission Grant**: Issue the catalog GET once web access is granted
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`ParseCatalog`)
//! - Worker → Plugin: [`WorkerResponse`] (`CatalogParsed`, error details)
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `h`/`Left`: Previous page
//! - `l`/`Right`: Next page
//! - `Tab`/`c`: Next category
//! - `C` (shift): Previous category
//! - `a`: All categories
//! - `/`: Enter search mode
//! - `r`: Refetch the catalog
//! - `q`: Close plugin
//!
//! In search mode:
//! - letters: Type characters
//! - `Enter`: Focus the filtered cards
//! - `Esc`: Exit search
//! - `/`: Return to search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zemoji::worker::{WorkerMessage, WorkerResponse, ZemojiWorker};
use zemoji::{handle_event, Action, Config, Event, InputMode, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ZemojiWorker, zemoji_worker, ZEMOJI_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the configured API endpoint.
struct State {
    /// Core application state from library layer.
    app: zemoji::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Endpoint the catalog is fetched from.
    api_url: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zemoji::initialize(&default_config),
            worker_name: "zemoji".to_string(),
            api_url: default_config.api_url,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests web access, and subscribes to events. The
    /// catalog fetch itself waits for the permission grant.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue the catalog GET request
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    /// - `WebRequestResult`: Catalog fetch completion
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zemoji::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(api_url = %config.api_url, "parsed configuration");
        self.app = zemoji::initialize(&config);
        self.api_url = config.api_url;
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Self::map_web_request_result_event(status, &body)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zemoji::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        // Only the typing focus captures letters; Navigating keeps the
        // normal-mode navigation keys so the footer hints hold.
        let typing = matches!(
            self.app.input_mode,
            InputMode::Search(SearchFocus::Typing)
        );

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Left => Event::PrevPage,
            BareKey::Right => Event::NextPage,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Tab if !typing => Event::NextCategory,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('l') => Event::NextPage,
            BareKey::Char('c') => Event::NextCategory,
            BareKey::Char('C') => Event::PrevCategory,
            BareKey::Char('a') => Event::AllCategories,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// The catalog fetch is deferred until web access is granted, so this is
    /// where the initial request goes out.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - fetching catalog");
                self.fetch_catalog();
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - catalog cannot be fetched");
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps web request results to application events.
    fn map_web_request_result_event(status: u16, body: &[u8]) -> Event {
        tracing::debug!(status = status, body_len = body.len(), "web request result event");

        if status == 0 {
            Event::FetchFailed {
                error: "request produced no response".to_string(),
            }
        } else {
            Event::CatalogFetched {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            }
        }
    }

    /// Issues the catalog GET request.
    ///
    /// The response arrives later as a `WebRequestResult` event.
    fn fetch_catalog(&self) {
        tracing::debug!(url = %self.api_url, "issuing catalog request");
        web_request(
            self.api_url.clone(),
            HttpVerb::Get,
            BTreeMap::new(),
            Vec::new(),
            BTreeMap::new(),
        );
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `FetchCatalog`: Re-issue the catalog GET request
    /// - `PostToWorker`: Send IPC message to worker thread
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCatalog => {
                self.fetch_catalog();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in_focus(input_mode: InputMode) -> State {
        let mut state = State::default();
        state.app.input_mode = input_mode;
        state
    }

    fn key(c: char) -> KeyWithModifier {
        KeyWithModifier::new(BareKey::Char(c))
    }

    #[test]
    fn typing_focus_captures_letters() {
        let state = state_in_focus(InputMode::Search(SearchFocus::Typing));
        assert_eq!(state.map_key_event(&key('j')), Some(Event::Char('j')));
        assert_eq!(state.map_key_event(&key('h')), Some(Event::Char('h')));
    }

    #[test]
    fn navigating_focus_maps_letters_to_navigation() {
        let state = state_in_focus(InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.map_key_event(&key('j')), Some(Event::KeyDown));
        assert_eq!(state.map_key_event(&key('k')), Some(Event::KeyUp));
        assert_eq!(state.map_key_event(&key('h')), Some(Event::PrevPage));
        assert_eq!(state.map_key_event(&key('l')), Some(Event::NextPage));
    }

    #[test]
    fn normal_mode_maps_commands() {
        let state = state_in_focus(InputMode::Normal);
        assert_eq!(state.map_key_event(&key('/')), Some(Event::SearchMode));
        assert_eq!(state.map_key_event(&key('q')), Some(Event::CloseFocus));
        assert_eq!(state.map_key_event(&key('x')), None);
    }
}
