//! Terminal rendering module.
//!
//! A small framebuffer-based rendering layer for the editor. No widget
//! toolkit: the editor view draws styled character cells into a framebuffer,
//! and the renderer flushes it to the terminal with diffed updates.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the pixel grid with precise control over aspect ratio
//!   (2 terminal columns per font cell)
//! - Avoid per-frame allocation on the draw path

pub mod editor_view;
pub mod fb;
pub mod renderer;

pub use tui_bitfont_core as core;
pub use tui_bitfont_types as types;

pub use editor_view::{EditorView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
