//! Zemoji: A Zellij plugin for browsing the EmojiHub catalog.
//!
//! Zemoji is a terminal multiplexer plugin that provides:
//! - A paginated card view over the full EmojiHub emoji catalog
//! - Category filtering with an "all categories" default
//! - Fuzzy name search with match highlighting
//! - A single catalog fetch over Zellij's web request API
//! - Asynchronous JSON parsing via Zellij worker threads

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filtering, paging
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!              │                         │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Worker Layer (worker/)│
//! │ - Rendering           │   │ - Catalog parsing     │
//! │ - Theming             │   │ - IPC bridge          │
//! │ - Components          │   │                       │
//! └───────────────────────┘   └───────────────────────┘
//!              │                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Emoji and catalog models (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (emoji records, catalog, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for async catalog parsing
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zemoji.wasm" {
//!         api_url "https://emojihub.yurace.pro/api/all"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Subscribe to Zellij events and request web access
//!
//! 2. **Catalog Fetch**:
//!    - Once web access is granted, issue a single GET to the API
//!    - Hand the response body to the worker thread for parsing
//!
//! 3. **Worker Processing**:
//!    - Deserialize the JSON array of emoji records
//!    - Send a `CatalogParsed` response back to the plugin
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, cards, page bar, footer)
//!    - Handle user input (j/k/h/l, Tab, /, r, q)
//!
//! # Key Design Decisions
//!
//! ## Single Fetch, Local Navigation
//!
//! The catalog is fetched once and every filter, search, and page change
//! operates on the in-memory copy. A fetch failure is logged and the plugin
//! keeps rendering its empty state; `r` retries.
//!
//! ## Worker-Based Parsing
//!
//! The full catalog is a multi-thousand record JSON array, so parsing runs
//! in a separate Zellij worker thread and the result comes back over IPC
//! messaging.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (fuzzy match highlighting)
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, PAGE_SIZE};
pub use domain::{Catalog, EmojiRecord, Result, ZemojiError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default EmojiHub endpoint returning the complete catalog.
pub const DEFAULT_API_URL: &str = "https://emojihub.yurace.pro/api/all";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zemoji.wasm" {
///     api_url "https://emojihub.yurace.pro/api/all"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint the catalog is fetched from.
    ///
    /// Must return a JSON array of emoji records. Default:
    /// [`DEFAULT_API_URL`].
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts values with fallback
    /// defaults; an empty `api_url` falls back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_url = config
            .get("api_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme and an empty catalog;
/// the catalog is populated later by the fetch and worker pipeline.
///
/// # Theme Resolution
///
/// 1. `theme_file` if set (tilde paths resolve through the sandbox mount)
/// 2. `theme` name if set
/// 3. Built-in default otherwise
///
/// Failure to load either option falls back to the default theme with a
/// debug log rather than failing plugin load.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zemoji plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_public_api_url() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn config_reads_values_from_zellij_map() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "http://localhost:9000/api/all".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, "http://localhost:9000/api/all");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_api_url_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "   ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn initialize_produces_empty_state() {
        let state = initialize(&Config::default());
        assert!(state.catalog.is_empty());
        assert_eq!(state.current_page, 1);
    }
}
