//! Terminal presentation.
//!
//! - [`Theme`] for styling report headers and notices
//! - [`should_use_colors`] for deciding whether to style at all

pub mod theme;

pub use theme::{should_use_colors, Theme};
