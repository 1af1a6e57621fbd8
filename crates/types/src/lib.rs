//! Shared types module - constants, the size table, and editor actions
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Character Range
//!
//! Fonts always cover printable ASCII, code 32 ("SPACE") through 126 (`~`)
//! inclusive, in ascending code-point order:
//!
//! - `ASCII_START`: 32
//! - `ASCII_END`: 126
//! - `GLYPH_COUNT`: 95
//!
//! The range is fixed; it is part of the `.rmsfont` file-format contract.
//!
//! # Size Table
//!
//! [`FontSize`] enumerates the closed set of supported glyph dimensions.
//! A font file carries no header; its dimensions are inferred purely from its
//! total byte length against this table, so the set and its order must never
//! change for saved files to stay loadable.
//!
//! # Examples
//!
//! ```
//! use tui_bitfont_types::{FontSize, EditorAction, GLYPH_COUNT};
//!
//! let size = FontSize::from_str("16x24").unwrap();
//! assert_eq!(size.bytes_per_glyph(), 48);
//! assert_eq!(size.file_len(), 48 * GLYPH_COUNT);
//! assert_eq!(FontSize::from_file_len(size.file_len()), Some(size));
//!
//! let action = EditorAction::from_str("flipHorizontal").unwrap();
//! assert_eq!(action, EditorAction::FlipHorizontal);
//! ```

/// First supported character code (SPACE)
pub const ASCII_START: u8 = 32;

/// Last supported character code (`~`)
pub const ASCII_END: u8 = 126;

/// Number of glyphs in every font (codes 32..=126)
pub const GLYPH_COUNT: usize = (ASCII_END - ASCII_START + 1) as usize;

/// Supported glyph dimensions.
///
/// This set is closed and ordered. Size detection on load picks the first
/// entry whose expected file length matches, so enumeration order is part of
/// the format contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    S8x8,
    S8x16,
    S16x16,
    S16x24,
    S24x24,
    S24x32,
}

impl FontSize {
    /// All supported sizes, in detection order.
    pub const ALL: [FontSize; 6] = [
        FontSize::S8x8,
        FontSize::S8x16,
        FontSize::S16x16,
        FontSize::S16x24,
        FontSize::S24x24,
        FontSize::S24x32,
    ];

    /// Glyph width in cells.
    pub const fn width(self) -> u8 {
        match self {
            FontSize::S8x8 | FontSize::S8x16 => 8,
            FontSize::S16x16 | FontSize::S16x24 => 16,
            FontSize::S24x24 | FontSize::S24x32 => 24,
        }
    }

    /// Glyph height in cells.
    pub const fn height(self) -> u8 {
        match self {
            FontSize::S8x8 => 8,
            FontSize::S8x16 | FontSize::S16x16 => 16,
            FontSize::S16x24 | FontSize::S24x24 => 24,
            FontSize::S24x32 => 32,
        }
    }

    /// Number of boolean cells per glyph.
    pub const fn cell_count(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Packed byte length of a single glyph: `ceil(width * height / 8)`.
    pub const fn bytes_per_glyph(self) -> usize {
        (self.cell_count() + 7) / 8
    }

    /// Total byte length of an encoded font file at this size.
    pub const fn file_len(self) -> usize {
        self.bytes_per_glyph() * GLYPH_COUNT
    }

    /// Infer a size from an encoded file length.
    ///
    /// Returns the first size in [`FontSize::ALL`] whose `file_len` matches.
    /// Length-only detection is ambiguous in principle (two sizes could share
    /// a byte length); first match wins.
    pub fn from_file_len(len: usize) -> Option<Self> {
        FontSize::ALL.iter().copied().find(|s| s.file_len() == len)
    }

    /// Parse a size from its `"WxH"` label.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "8x8" => Some(FontSize::S8x8),
            "8x16" => Some(FontSize::S8x16),
            "16x16" => Some(FontSize::S16x16),
            "16x24" => Some(FontSize::S16x24),
            "24x24" => Some(FontSize::S24x24),
            "24x32" => Some(FontSize::S24x32),
            _ => None,
        }
    }

    /// `"WxH"` label.
    pub const fn as_str(self) -> &'static str {
        match self {
            FontSize::S8x8 => "8x8",
            FontSize::S8x16 => "8x16",
            FontSize::S16x16 => "16x16",
            FontSize::S16x24 => "16x24",
            FontSize::S24x24 => "24x24",
            FontSize::S24x32 => "24x32",
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::S8x8
    }
}

/// Display name for a character code: the character itself, or `"SPACE"`.
pub fn char_display(code: u8) -> String {
    if code == ASCII_START {
        "SPACE".to_string()
    } else {
        (code as char).to_string()
    }
}

/// Editor actions that can be applied to modify editor state
///
/// Each action maps to a specific editing operation on the active glyph,
/// the cursor, or the font as a whole. File-touching actions (save, export,
/// reload) do not perform I/O in core; they surface an I/O request to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Move cursor one cell left
    CursorLeft,
    /// Move cursor one cell right
    CursorRight,
    /// Move cursor one cell up
    CursorUp,
    /// Move cursor one cell down
    CursorDown,
    /// Flip the cell under the cursor
    ToggleCell,
    /// Enter/leave drag-paint mode
    TogglePaint,
    /// Switch to the previous character
    PrevGlyph,
    /// Switch to the next character
    NextGlyph,
    /// Blank the active glyph
    ClearGlyph,
    /// Copy the active glyph to the clipboard
    CopyGlyph,
    /// Replace the active glyph with the clipboard
    PasteGlyph,
    /// OR the clipboard onto the active glyph
    MergeGlyph,
    /// Shift the active glyph one cell left
    NudgeLeft,
    /// Shift the active glyph one cell right
    NudgeRight,
    /// Shift the active glyph one cell up
    NudgeUp,
    /// Shift the active glyph one cell down
    NudgeDown,
    /// Mirror the active glyph left-to-right
    FlipHorizontal,
    /// Flip the active glyph top-to-bottom
    FlipVertical,
    /// Copy the left half onto the right half, mirrored
    MirrorLeftToRight,
    /// Copy the top half onto the bottom half, mirrored
    MirrorTopToBottom,
    /// Write the font file
    Save,
    /// Write the C header export
    ExportHeader,
    /// Re-read the font file from disk
    Reload,
}

impl EditorAction {
    /// Parse an action from its camelCase string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cursorLeft" => Some(EditorAction::CursorLeft),
            "cursorRight" => Some(EditorAction::CursorRight),
            "cursorUp" => Some(EditorAction::CursorUp),
            "cursorDown" => Some(EditorAction::CursorDown),
            "toggleCell" => Some(EditorAction::ToggleCell),
            "togglePaint" => Some(EditorAction::TogglePaint),
            "prevGlyph" => Some(EditorAction::PrevGlyph),
            "nextGlyph" => Some(EditorAction::NextGlyph),
            "clearGlyph" => Some(EditorAction::ClearGlyph),
            "copyGlyph" => Some(EditorAction::CopyGlyph),
            "pasteGlyph" => Some(EditorAction::PasteGlyph),
            "mergeGlyph" => Some(EditorAction::MergeGlyph),
            "nudgeLeft" => Some(EditorAction::NudgeLeft),
            "nudgeRight" => Some(EditorAction::NudgeRight),
            "nudgeUp" => Some(EditorAction::NudgeUp),
            "nudgeDown" => Some(EditorAction::NudgeDown),
            "flipHorizontal" => Some(EditorAction::FlipHorizontal),
            "flipVertical" => Some(EditorAction::FlipVertical),
            "mirrorLeftToRight" => Some(EditorAction::MirrorLeftToRight),
            "mirrorTopToBottom" => Some(EditorAction::MirrorTopToBottom),
            "save" => Some(EditorAction::Save),
            "exportHeader" => Some(EditorAction::ExportHeader),
            "reload" => Some(EditorAction::Reload),
            _ => None,
        }
    }

    /// camelCase string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            EditorAction::CursorLeft => "cursorLeft",
            EditorAction::CursorRight => "cursorRight",
            EditorAction::CursorUp => "cursorUp",
            EditorAction::CursorDown => "cursorDown",
            EditorAction::ToggleCell => "toggleCell",
            EditorAction::TogglePaint => "togglePaint",
            EditorAction::PrevGlyph => "prevGlyph",
            EditorAction::NextGlyph => "nextGlyph",
            EditorAction::ClearGlyph => "clearGlyph",
            EditorAction::CopyGlyph => "copyGlyph",
            EditorAction::PasteGlyph => "pasteGlyph",
            EditorAction::MergeGlyph => "mergeGlyph",
            EditorAction::NudgeLeft => "nudgeLeft",
            EditorAction::NudgeRight => "nudgeRight",
            EditorAction::NudgeUp => "nudgeUp",
            EditorAction::NudgeDown => "nudgeDown",
            EditorAction::FlipHorizontal => "flipHorizontal",
            EditorAction::FlipVertical => "flipVertical",
            EditorAction::MirrorLeftToRight => "mirrorLeftToRight",
            EditorAction::MirrorTopToBottom => "mirrorTopToBottom",
            EditorAction::Save => "save",
            EditorAction::ExportHeader => "exportHeader",
            EditorAction::Reload => "reload",
        }
    }
}
