//! Error types for the Zemoji plugin.
//!
//! This module defines the centralized error type [`ZemojiError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Zemoji plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from catalog fetching to I/O failures and configuration issues. Most variants carry
/// a description string; I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use zemoji::domain::ZemojiError;
///
/// fn validate_config() -> Result<(), ZemojiError> {
///     Err(ZemojiError::Config("api_url must not be empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZemojiError {
    /// The emoji API request failed or returned an unusable response.
    ///
    /// Covers transport failures surfaced by the Zellij host as well as non-2xx
    /// status codes. The string contains a description of what went wrong.
    #[error("API error: {0}")]
    Api(String),

    /// The fetched catalog body could not be parsed.
    ///
    /// Occurs when the response is not the expected JSON array of emoji records.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    ///
    /// Occurs when the plugin cannot communicate with its background worker thread,
    /// typically while handing off a fetched catalog body for parsing.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zemoji operations.
///
/// This is a type alias for `std::result::Result<T, ZemojiError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZemojiError>;
