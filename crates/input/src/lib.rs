//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_bitfont_types::EditorAction`] values;
//! the editor core never sees raw key codes.

pub mod map;

pub use tui_bitfont_types as types;

pub use map::{action_for_key, should_quit};
