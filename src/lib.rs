//! TUI bitmap font editor (workspace facade crate).
//!
//! This package keeps the `tui_bitfont::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_bitfont_core as core;
pub use tui_bitfont_input as input;
pub use tui_bitfont_term as term;
pub use tui_bitfont_types as types;
