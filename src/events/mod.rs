//! Event handling modules.

pub mod terminal;
