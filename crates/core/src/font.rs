//! Font module - the ordered glyph set for one size
//!
//! A font holds exactly one glyph per character code 32..=126, all sharing
//! the same dimensions. It is created blank when a size is chosen and
//! replaced wholesale when a file is loaded.

use tui_bitfont_types::{FontSize, ASCII_END, ASCII_START, GLYPH_COUNT};

use crate::glyph::Glyph;

/// The full ordered glyph set covering ASCII 32..=126.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    size: FontSize,
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Create an all-blank font at the given size.
    pub fn new(size: FontSize) -> Self {
        Self {
            size,
            glyphs: (0..GLYPH_COUNT).map(|_| Glyph::new(size)).collect(),
        }
    }

    pub fn size(&self) -> FontSize {
        self.size
    }

    /// Character code for a glyph index.
    pub fn char_code(index: usize) -> u8 {
        debug_assert!(index < GLYPH_COUNT);
        ASCII_START + index as u8
    }

    /// Glyph index for a character, if it is in the supported range.
    pub fn index_of(ch: char) -> Option<usize> {
        let code = ch as u32;
        if (ASCII_START as u32..=ASCII_END as u32).contains(&code) {
            Some((code - ASCII_START as u32) as usize)
        } else {
            None
        }
    }

    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn glyph_mut(&mut self, index: usize) -> Option<&mut Glyph> {
        self.glyphs.get_mut(index)
    }

    pub fn glyph_for_char(&self, ch: char) -> Option<&Glyph> {
        self.glyph(Self::index_of(ch)?)
    }

    pub fn glyph_for_char_mut(&mut self, ch: char) -> Option<&mut Glyph> {
        self.glyph_mut(Self::index_of(ch)?)
    }

    /// Replace a glyph. Returns false if the index or dimensions don't fit.
    pub fn replace(&mut self, index: usize, glyph: Glyph) -> bool {
        if glyph.width() != self.size.width() || glyph.height() != self.size.height() {
            return false;
        }
        match self.glyphs.get_mut(index) {
            Some(slot) => {
                *slot = glyph;
                true
            }
            None => false,
        }
    }

    /// Iterate glyphs in character-code order.
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    /// Build from pre-decoded glyphs. Used by the codec.
    pub(crate) fn from_glyphs(size: FontSize, glyphs: Vec<Glyph>) -> Self {
        debug_assert_eq!(glyphs.len(), GLYPH_COUNT);
        Self { size, glyphs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_font_is_blank() {
        let font = Font::new(FontSize::S16x16);
        assert_eq!(font.iter().count(), GLYPH_COUNT);
        assert!(font.iter().all(|g| g.is_blank()));
    }

    #[test]
    fn test_char_indexing() {
        assert_eq!(Font::index_of(' '), Some(0));
        assert_eq!(Font::index_of('A'), Some(33));
        assert_eq!(Font::index_of('~'), Some(94));
        assert_eq!(Font::index_of('\n'), None);
        assert_eq!(Font::index_of('\u{7f}'), None);

        assert_eq!(Font::char_code(0), 32);
        assert_eq!(Font::char_code(33), 65);
        assert_eq!(Font::char_code(94), 126);
    }

    #[test]
    fn test_replace_rejects_wrong_size() {
        let mut font = Font::new(FontSize::S8x8);
        assert!(!font.replace(0, Glyph::new(FontSize::S16x16)));
        assert!(font.replace(0, Glyph::new(FontSize::S8x8)));
        assert!(!font.replace(GLYPH_COUNT, Glyph::new(FontSize::S8x8)));
    }
}
