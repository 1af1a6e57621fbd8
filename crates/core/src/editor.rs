//! Editor module - interaction state and action dispatch
//!
//! [`EditorState`] owns the font being edited plus the cursor, clipboard,
//! drag-paint mode, and status line. It performs no I/O: file-touching
//! actions return an [`IoRequest`] for the caller to execute, and loading
//! goes through [`EditorState::load_bytes`], which swaps the font in
//! atomically (decode-then-swap; a failed load leaves everything untouched).
//!
//! Paint-drag semantics match pointer painting: entering paint mode captures
//! the inverse of the cell under the cursor as the paint value and applies
//! it, every subsequent cursor move paints the entered cell with that value,
//! and leaving paint mode ends the drag.

use tui_bitfont_types::{char_display, EditorAction, FontSize, GLYPH_COUNT};

use crate::codec::{decode_font, CodecError};
use crate::font::Font;
use crate::glyph::Glyph;

/// User-visible status message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// File operation requested by an action; the caller performs the I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoRequest {
    /// Write the encoded font buffer.
    Save,
    /// Write the C header export.
    ExportHeader,
    /// Re-read the font file and feed it back via `load_bytes`.
    Reload,
}

/// Complete editor state for one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    font: Font,
    active_index: usize,
    cursor_x: u8,
    cursor_y: u8,
    clipboard: Option<Glyph>,
    /// While `Some`, cursor moves paint the entered cell with this value.
    paint: Option<bool>,
    status: StatusLine,
}

impl EditorState {
    /// Create an editor on a fresh blank font.
    pub fn new(size: FontSize) -> Self {
        let mut state = Self {
            font: Font::new(size),
            active_index: 0,
            cursor_x: 0,
            cursor_y: 0,
            clipboard: None,
            paint: None,
            status: StatusLine::default(),
        };
        state.set_status(
            format!("Created a new {} font.", size.as_str()),
            false,
        );
        state
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Character code of the glyph being edited.
    pub fn active_char_code(&self) -> u8 {
        Font::char_code(self.active_index)
    }

    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn clipboard(&self) -> Option<&Glyph> {
        self.clipboard.as_ref()
    }

    pub fn paint_value(&self) -> Option<bool> {
        self.paint
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn set_status(&mut self, text: String, is_error: bool) {
        self.status = StatusLine { text, is_error };
    }

    pub fn active_glyph(&self) -> &Glyph {
        // active_index is always < GLYPH_COUNT.
        self.font.glyph(self.active_index).unwrap()
    }

    fn active_glyph_mut(&mut self) -> &mut Glyph {
        self.font.glyph_mut(self.active_index).unwrap()
    }

    /// Replace the font from an encoded buffer, atomically.
    ///
    /// On error the font, clipboard, and cursor are untouched and the error
    /// is surfaced on the status line.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        match decode_font(bytes) {
            Ok(font) => {
                let size = font.size();
                self.font = font;
                self.active_index = 0;
                self.cursor_x = 0;
                self.cursor_y = 0;
                self.clipboard = None;
                self.paint = None;
                self.set_status(
                    format!("Loaded {} font ({} bytes).", size.as_str(), bytes.len()),
                    false,
                );
                Ok(())
            }
            Err(err) => {
                self.set_status(err.to_string(), true);
                Err(err)
            }
        }
    }

    /// Apply one editor action. Returns an I/O request when the action needs
    /// the caller to touch the filesystem.
    pub fn apply_action(&mut self, action: EditorAction) -> Option<IoRequest> {
        match action {
            EditorAction::CursorLeft => self.move_cursor(-1, 0),
            EditorAction::CursorRight => self.move_cursor(1, 0),
            EditorAction::CursorUp => self.move_cursor(0, -1),
            EditorAction::CursorDown => self.move_cursor(0, 1),
            EditorAction::ToggleCell => self.toggle_cell(),
            EditorAction::TogglePaint => self.toggle_paint(),
            EditorAction::PrevGlyph => self.select_glyph(
                (self.active_index + GLYPH_COUNT - 1) % GLYPH_COUNT,
            ),
            EditorAction::NextGlyph => {
                self.select_glyph((self.active_index + 1) % GLYPH_COUNT)
            }
            EditorAction::ClearGlyph => {
                self.active_glyph_mut().clear();
                self.set_status("Cleared current glyph.".to_string(), false);
            }
            EditorAction::CopyGlyph => {
                self.clipboard = Some(self.active_glyph().clone());
                self.set_status(
                    "Copied current glyph. Select another glyph to paste.".to_string(),
                    false,
                );
            }
            EditorAction::PasteGlyph => {
                if let Some(copied) = self.clipboard.clone() {
                    self.font.replace(self.active_index, copied);
                    self.set_status("Pasted glyph onto current character.".to_string(), false);
                }
            }
            EditorAction::MergeGlyph => {
                if let Some(copied) = self.clipboard.clone() {
                    let merged = self.active_glyph().merged(&copied);
                    self.font.replace(self.active_index, merged);
                    self.set_status("Merged glyph onto current character.".to_string(), false);
                }
            }
            EditorAction::NudgeLeft => self.replace_active(self.active_glyph().translated(-1, 0)),
            EditorAction::NudgeRight => self.replace_active(self.active_glyph().translated(1, 0)),
            EditorAction::NudgeUp => self.replace_active(self.active_glyph().translated(0, -1)),
            EditorAction::NudgeDown => self.replace_active(self.active_glyph().translated(0, 1)),
            EditorAction::FlipHorizontal => {
                self.replace_active(self.active_glyph().flipped(true, false));
                self.set_status("Mirrored glyph horizontally.".to_string(), false);
            }
            EditorAction::FlipVertical => {
                self.replace_active(self.active_glyph().flipped(false, true));
                self.set_status("Flipped glyph vertically.".to_string(), false);
            }
            EditorAction::MirrorLeftToRight => {
                self.replace_active(self.active_glyph().mirrored_left_to_right());
                self.set_status("Mirrored left half to the right.".to_string(), false);
            }
            EditorAction::MirrorTopToBottom => {
                self.replace_active(self.active_glyph().mirrored_top_to_bottom());
                self.set_status("Mirrored top half to the bottom.".to_string(), false);
            }
            EditorAction::Save => return Some(IoRequest::Save),
            EditorAction::ExportHeader => return Some(IoRequest::ExportHeader),
            EditorAction::Reload => return Some(IoRequest::Reload),
        }
        None
    }

    fn replace_active(&mut self, glyph: Glyph) {
        self.font.replace(self.active_index, glyph);
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) {
        let size = self.font.size();
        let nx = (self.cursor_x as i16 + dx).clamp(0, size.width() as i16 - 1);
        let ny = (self.cursor_y as i16 + dy).clamp(0, size.height() as i16 - 1);
        if (nx, ny) == (self.cursor_x as i16, self.cursor_y as i16) {
            return;
        }
        self.cursor_x = nx as u8;
        self.cursor_y = ny as u8;
        if let Some(value) = self.paint {
            self.active_glyph_mut().set(nx, ny, value);
        }
    }

    fn toggle_cell(&mut self) {
        let (x, y) = (self.cursor_x as i16, self.cursor_y as i16);
        self.active_glyph_mut().toggle(x, y);
    }

    fn toggle_paint(&mut self) {
        match self.paint {
            Some(_) => {
                self.paint = None;
                self.set_status("Paint mode off.".to_string(), false);
            }
            None => {
                let (x, y) = (self.cursor_x as i16, self.cursor_y as i16);
                // First cell touched decides whether the drag paints on or off.
                let value = !self.active_glyph().get(x, y).unwrap_or(false);
                self.active_glyph_mut().set(x, y, value);
                self.paint = Some(value);
                self.set_status(
                    format!("Paint mode on ({}).", if value { "set" } else { "erase" }),
                    false,
                );
            }
        }
    }

    fn select_glyph(&mut self, index: usize) {
        self.active_index = index;
        // A drag cannot span glyphs.
        self.paint = None;
        let code = Font::char_code(index);
        self.set_status(
            format!("Editing: {} ({})", char_display(code), code),
            false,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_font;

    #[test]
    fn test_toggle_cell_under_cursor() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::ToggleCell);
        assert_eq!(ed.active_glyph().get(0, 0), Some(true));
        ed.apply_action(EditorAction::ToggleCell);
        assert_eq!(ed.active_glyph().get(0, 0), Some(false));
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::CursorLeft);
        ed.apply_action(EditorAction::CursorUp);
        assert_eq!(ed.cursor(), (0, 0));
        for _ in 0..20 {
            ed.apply_action(EditorAction::CursorRight);
            ed.apply_action(EditorAction::CursorDown);
        }
        assert_eq!(ed.cursor(), (7, 7));
    }

    #[test]
    fn test_paint_drag_paints_entered_cells() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::TogglePaint);
        assert_eq!(ed.paint_value(), Some(true));
        assert_eq!(ed.active_glyph().get(0, 0), Some(true));

        ed.apply_action(EditorAction::CursorRight);
        ed.apply_action(EditorAction::CursorRight);
        assert_eq!(ed.active_glyph().get(1, 0), Some(true));
        assert_eq!(ed.active_glyph().get(2, 0), Some(true));

        ed.apply_action(EditorAction::TogglePaint);
        assert_eq!(ed.paint_value(), None);
        ed.apply_action(EditorAction::CursorRight);
        assert_eq!(ed.active_glyph().get(3, 0), Some(false));
    }

    #[test]
    fn test_paint_value_comes_from_first_cell() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::ToggleCell);
        // Cell under cursor is on, so the drag erases.
        ed.apply_action(EditorAction::TogglePaint);
        assert_eq!(ed.paint_value(), Some(false));
        assert_eq!(ed.active_glyph().get(0, 0), Some(false));
    }

    #[test]
    fn test_glyph_navigation_wraps_and_ends_paint() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::TogglePaint);
        ed.apply_action(EditorAction::PrevGlyph);
        assert_eq!(ed.active_index(), GLYPH_COUNT - 1);
        assert_eq!(ed.active_char_code(), 126);
        assert_eq!(ed.paint_value(), None);
        ed.apply_action(EditorAction::NextGlyph);
        assert_eq!(ed.active_index(), 0);
    }

    #[test]
    fn test_copy_paste_merge() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::ToggleCell);
        ed.apply_action(EditorAction::CopyGlyph);

        ed.apply_action(EditorAction::NextGlyph);
        ed.apply_action(EditorAction::CursorRight);
        ed.apply_action(EditorAction::ToggleCell);
        ed.apply_action(EditorAction::MergeGlyph);
        assert_eq!(ed.active_glyph().get(0, 0), Some(true));
        assert_eq!(ed.active_glyph().get(1, 0), Some(true));

        ed.apply_action(EditorAction::PasteGlyph);
        assert_eq!(ed.active_glyph().get(0, 0), Some(true));
        assert_eq!(ed.active_glyph().get(1, 0), Some(false));
    }

    #[test]
    fn test_paste_without_copy_is_noop() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::ToggleCell);
        let before = ed.font().clone();
        ed.apply_action(EditorAction::PasteGlyph);
        ed.apply_action(EditorAction::MergeGlyph);
        assert_eq!(*ed.font(), before);
    }

    #[test]
    fn test_io_actions_surface_requests() {
        let mut ed = EditorState::new(FontSize::S8x8);
        assert_eq!(ed.apply_action(EditorAction::Save), Some(IoRequest::Save));
        assert_eq!(
            ed.apply_action(EditorAction::ExportHeader),
            Some(IoRequest::ExportHeader)
        );
        assert_eq!(ed.apply_action(EditorAction::Reload), Some(IoRequest::Reload));
        assert_eq!(ed.apply_action(EditorAction::ToggleCell), None);
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::ToggleCell);
        ed.apply_action(EditorAction::CopyGlyph);
        let font_before = ed.font().clone();

        let err = ed.load_bytes(&[0u8; 761]).unwrap_err();
        assert_eq!(err, CodecError::SizeMismatch { len: 761 });
        assert_eq!(*ed.font(), font_before);
        assert!(ed.clipboard().is_some());
        assert!(ed.status().is_error);
    }

    #[test]
    fn test_load_replaces_whole_state() {
        let mut source = EditorState::new(FontSize::S16x16);
        source.apply_action(EditorAction::ToggleCell);
        let bytes = encode_font(source.font());

        let mut ed = EditorState::new(FontSize::S8x8);
        ed.apply_action(EditorAction::NextGlyph);
        ed.apply_action(EditorAction::CopyGlyph);

        ed.load_bytes(&bytes).unwrap();
        assert_eq!(ed.font().size(), FontSize::S16x16);
        assert_eq!(ed.active_index(), 0);
        assert_eq!(ed.cursor(), (0, 0));
        assert!(ed.clipboard().is_none());
        assert!(!ed.status().is_error);
        assert_eq!(ed.active_glyph().get(0, 0), Some(true));
    }
}
