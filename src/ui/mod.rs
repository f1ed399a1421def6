//! Terminal UI layer.
//!
//! State is projected into a [`UIViewModel`] first, then component
//! renderers draw it with ANSI escapes and theme colors. Keeping the
//! projection separate from drawing lets the viewmodel be unit tested
//! without a terminal.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, PageBarInfo, PageEntry, SearchBarInfo,
    UIViewModel,
};
