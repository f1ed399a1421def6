//! Domain layer for the Zemoji plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or infrastructure concerns. It follows
//! domain-driven design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`emoji`]: Emoji record model and glyph decoding
//! - [`catalog`]: Loaded collection with derived category data
//!
//! # Examples
//!
//! ```
//! use zemoji::domain::{Catalog, EmojiRecord, Result};
//!
//! fn load(records: Vec<EmojiRecord>) -> Result<Catalog> {
//!     Ok(Catalog::from_records(records))
//! }
//! ```

pub mod catalog;
pub mod emoji;
pub mod error;

pub use catalog::Catalog;
pub use emoji::EmojiRecord;
pub use error::{Result, ZemojiError};
