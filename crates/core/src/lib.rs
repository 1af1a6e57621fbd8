//! Core editor logic - pure, deterministic, and testable
//!
//! This module contains the glyph bitmap model, the bit-packed font codec,
//! the C header exporter, and the editor state machine. It has **zero
//! dependencies** on terminal rendering or I/O, making it:
//!
//! - **Deterministic**: every operation is a total function over in-memory state
//! - **Testable**: the codec and all transforms are unit-tested in isolation
//! - **Portable**: usable from a terminal UI, a batch converter, or tests
//!
//! # Module Structure
//!
//! - [`glyph`]: a single character's boolean cell bitmap and its transforms
//! - [`font`]: the ordered 95-glyph set covering ASCII 32..=126
//! - [`codec`]: glyph/font <-> byte buffer conversion (`.rmsfont` format)
//! - [`export`]: C header byte-array rendering of an encoded font
//! - [`editor`]: cursor, clipboard, paint mode, status line, action dispatch
//!
//! # Format
//!
//! The `.rmsfont` format is a flat byte buffer with no header: 95 glyphs,
//! each bit-packed column-major (x outer, y inner, LSB first) into
//! `ceil(width*height/8)` bytes. Dimensions are inferred from total length
//! against the closed size table in `tui_bitfont_types::FontSize`.
//!
//! # Example
//!
//! ```
//! use tui_bitfont_core::{Font, codec};
//! use tui_bitfont_types::FontSize;
//!
//! let mut font = Font::new(FontSize::S8x8);
//! font.glyph_for_char_mut('A').unwrap().set(0, 0, true);
//!
//! let bytes = codec::encode_font(&font);
//! assert_eq!(bytes.len(), 760);
//!
//! let back = codec::decode_font(&bytes).unwrap();
//! assert_eq!(back, font);
//! ```

pub mod codec;
pub mod editor;
pub mod export;
pub mod font;
pub mod glyph;

pub use codec::CodecError;
pub use editor::{EditorState, IoRequest, StatusLine};
pub use font::Font;
pub use glyph::Glyph;
