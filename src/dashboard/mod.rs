//! Presentation model - view state, page loading and text rendering.
//!
//! Independent of Discord: the bot layer picks a [`view::Section`], calls
//! [`load_page`] and sends whatever [`render::render_page`] produces.

/// Widgets per section and the queries behind them
pub mod page;
/// Pure text rendering of pages
pub mod render;
/// Navigation state
pub mod view;

pub use page::{Page, Widget, load_page};
pub use view::Section;
