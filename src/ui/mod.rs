//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library,
//! including page layout, list and form surfaces, and the modal dialogs
//! layered over them.

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub use render::render;
