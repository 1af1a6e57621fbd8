//! EditorView: maps `core::EditorState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the editing grid sits top-left with a box border, the info panel
//! (current character, size, clipboard, paint mode, key help) to its right
//! together with a 1:1 half-block preview of the active glyph, the character
//! strip on the second-to-last row, and the status line at the bottom.

use crate::core::EditorState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{char_display, ASCII_START, GLYPH_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the font editor.
pub struct EditorView {
    /// Font cell width in terminal columns.
    cell_w: u16,
    /// Font cell height in terminal rows.
    cell_h: u16,
}

impl Default for EditorView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl EditorView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current editor state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, state: &EditorState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = state.font().size();
        let grid_w = size.width() as u16 * self.cell_w;
        let grid_h = size.height() as u16 * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, 0, 0, frame_w, frame_h, border);
        self.draw_grid(fb, state, 0, 0);

        let panel_x = frame_w + 2;
        self.draw_panel(fb, state, panel_x, 0, viewport);

        if viewport.height >= 2 {
            self.draw_char_strip(fb, state, viewport.height - 2, viewport.width);
            self.draw_status(fb, state, viewport.height - 1, viewport.width);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &EditorState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, state: &EditorState, start_x: u16, start_y: u16) {
        let glyph = state.active_glyph();
        let (cx, cy) = state.cursor();

        let on = CellStyle::new(Rgb::new(120, 190, 255), Rgb::new(20, 20, 30)).bold();
        let off = CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(20, 20, 30)).dim();
        let cursor_on = CellStyle::new(Rgb::new(20, 20, 30), Rgb::new(240, 200, 80)).bold();
        let cursor_off = CellStyle::new(Rgb::new(60, 60, 60), Rgb::new(240, 200, 80));

        for y in 0..glyph.height() as i16 {
            for x in 0..glyph.width() as i16 {
                let lit = glyph.get(x, y) == Some(true);
                let is_cursor = (x as u8, y as u8) == (cx, cy);
                let (ch, style) = match (lit, is_cursor) {
                    (true, false) => ('█', on),
                    (false, false) => ('·', off),
                    (true, true) => ('█', cursor_on),
                    (false, true) => ('·', cursor_off),
                };
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &EditorState,
        panel_x: u16,
        start_y: u16,
        viewport: Viewport,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();

        let code = state.active_char_code();
        let mut y = start_y;
        fb.put_str(
            panel_x,
            y,
            &format!("Editing: {} ({})", char_display(code), code),
            label,
        );
        y += 1;
        fb.put_str(
            panel_x,
            y,
            &format!("Size: {}", state.font().size().as_str()),
            value,
        );
        y += 1;
        fb.put_str(
            panel_x,
            y,
            match state.clipboard() {
                Some(_) => "Clipboard: glyph",
                None => "Clipboard: empty",
            },
            value,
        );
        y += 1;
        let paint = match state.paint_value() {
            None => "Paint: off",
            Some(true) => "Paint: set",
            Some(false) => "Paint: erase",
        };
        fb.put_str(panel_x, y, paint, value);
        y += 2;

        y = self.draw_preview(fb, state, panel_x, y);
        y += 1;

        for line in [
            "arrows/hjkl move   space toggle",
            "v paint   shift+arrows nudge",
            "tab/[ ] char   f/F flip   i/I mirror",
            "x clear  y copy  p paste  m merge",
            "w save   e export   r reload   q quit",
        ] {
            if y >= viewport.height.saturating_sub(2) {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    /// 1:1 preview using half blocks, two font rows per terminal row.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        state: &EditorState,
        panel_x: u16,
        start_y: u16,
    ) -> u16 {
        let glyph = state.active_glyph();
        let style = CellStyle::new(Rgb::new(120, 190, 255), Rgb::new(20, 20, 30));
        let rows = (glyph.height() as u16 + 1) / 2;

        for row in 0..rows {
            for x in 0..glyph.width() as i16 {
                let top = glyph.get(x, row as i16 * 2) == Some(true);
                let bottom = glyph.get(x, row as i16 * 2 + 1) == Some(true);
                let ch = match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };
                fb.put_char(panel_x + x as u16, start_y + row, ch, style);
            }
        }
        start_y + rows
    }

    /// One column per character; the active one highlighted, blank glyphs dim.
    fn draw_char_strip(&self, fb: &mut FrameBuffer, state: &EditorState, y: u16, width: u16) {
        if width == 0 {
            return;
        }
        let visible = width as usize;
        let active = state.active_index();

        // Keep the active character in view.
        let start = if visible >= GLYPH_COUNT {
            0
        } else {
            active.saturating_sub(visible / 2).min(GLYPH_COUNT - visible)
        };

        let plain = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let blank = CellStyle::new(Rgb::new(110, 110, 110), Rgb::new(0, 0, 0)).dim();
        let current = CellStyle::new(Rgb::new(20, 20, 30), Rgb::new(240, 200, 80)).bold();

        for (col, index) in (start..GLYPH_COUNT).take(visible).enumerate() {
            let ch = (ASCII_START + index as u8) as char;
            let style = if index == active {
                current
            } else if state.font().glyph(index).map(|g| g.is_blank()).unwrap_or(true) {
                blank
            } else {
                plain
            };
            fb.put_char(col as u16, y, ch, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, state: &EditorState, y: u16, width: u16) {
        let status = state.status();
        let style = if status.is_error {
            CellStyle::new(Rgb::new(255, 100, 90), Rgb::new(0, 0, 0)).bold()
        } else {
            CellStyle::new(Rgb::new(130, 180, 255), Rgb::new(0, 0, 0))
        };
        fb.fill_rect(0, y, width, 1, ' ', CellStyle::default());
        fb.put_str(0, y, &status.text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
