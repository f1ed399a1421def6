//! UI component renderers.
//!
//! Each component renders one region of the screen from viewmodel data
//! using ANSI positioning and theme colors.

mod cards;
mod empty;
mod footer;
mod header;
mod pagebar;
mod search;

pub use cards::{render_card_headers, render_cards};
pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::{render_border, render_header};
pub use pagebar::render_page_bar;
pub use search::render_search_bar;
