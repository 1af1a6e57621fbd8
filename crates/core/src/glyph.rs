//! Glyph module - the bitmap for a single character
//!
//! A glyph is a `width x height` grid of boolean cells stored in a flat
//! vector, row-major order (y * width + x).
//! Coordinates: (x, y) where x runs left to right and y top to bottom.
//! Transforms are pure: they return a new glyph and never wrap pixels.

use tui_bitfont_types::FontSize;

/// The bitmap for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Glyph {
    /// Create an all-off glyph at the given size.
    pub fn new(size: FontSize) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            cells: vec![false; size.cell_count()],
        }
    }

    /// Glyph width in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get cell at (x, y). Returns `None` out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i16, y: i16, on: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = on;
                true
            }
            None => false,
        }
    }

    /// Invert cell at (x, y) and return its new value, or `None` out of bounds.
    pub fn toggle(&mut self, x: i16, y: i16) -> Option<bool> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Some(self.cells[idx])
    }

    /// True if every cell is off.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Shift the glyph by (dx, dy).
    ///
    /// Cell (x, y) takes the value of source cell (x - dx, y - dy) when that
    /// coordinate is in bounds, else off. Pixels shifted past an edge are
    /// discarded, not wrapped; shifting by (0, 0) is the identity.
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        let mut next = self.blank_like();
        for y in 0..self.height as i16 {
            for x in 0..self.width as i16 {
                if let Some(on) = self.get(x - dx, y - dy) {
                    next.set(x, y, on);
                }
            }
        }
        next
    }

    /// Mirror across the vertical axis, the horizontal axis, or both.
    ///
    /// Applying the same flip twice restores the original exactly.
    pub fn flipped(&self, horizontal: bool, vertical: bool) -> Self {
        let mut next = self.blank_like();
        for y in 0..self.height as i16 {
            for x in 0..self.width as i16 {
                let sx = if horizontal { self.width as i16 - 1 - x } else { x };
                let sy = if vertical { self.height as i16 - 1 - y } else { y };
                // sx/sy are always in bounds here.
                if let Some(on) = self.get(sx, sy) {
                    next.set(x, y, on);
                }
            }
        }
        next
    }

    /// Copy the left half onto the right half, mirrored column by column.
    ///
    /// Columns `x < floor(width / 2)` land at `width - 1 - x` on the same
    /// row. The left half and any unpaired middle column are unchanged.
    pub fn mirrored_left_to_right(&self) -> Self {
        let mut next = self.clone();
        let half = (self.width / 2) as i16;
        for y in 0..self.height as i16 {
            for x in 0..half {
                if let Some(on) = self.get(x, y) {
                    next.set(self.width as i16 - 1 - x, y, on);
                }
            }
        }
        next
    }

    /// Copy the top half onto the bottom half, mirrored row by row.
    pub fn mirrored_top_to_bottom(&self) -> Self {
        let mut next = self.clone();
        let half = (self.height / 2) as i16;
        for y in 0..half {
            for x in 0..self.width as i16 {
                if let Some(on) = self.get(x, y) {
                    next.set(x, self.height as i16 - 1 - y, on);
                }
            }
        }
        next
    }

    /// Cell-wise OR of `other` onto this glyph.
    ///
    /// Cells already on stay on; cells on in `other` become on. Both glyphs
    /// must share dimensions; mismatched sizes leave this glyph unchanged.
    pub fn merged(&self, other: &Glyph) -> Self {
        if other.width != self.width || other.height != self.height {
            return self.clone();
        }
        let mut next = self.clone();
        for (dst, &src) in next.cells.iter_mut().zip(other.cells.iter()) {
            *dst |= src;
        }
        next
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_cells(size: FontSize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), size.cell_count());
        Self {
            width: size.width(),
            height: size.height(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_with(size: FontSize, on: &[(i16, i16)]) -> Glyph {
        let mut g = Glyph::new(size);
        for &(x, y) in on {
            assert!(g.set(x, y, true));
        }
        g
    }

    #[test]
    fn test_index_bounds() {
        let g = Glyph::new(FontSize::S8x8);
        assert_eq!(g.get(0, 0), Some(false));
        assert_eq!(g.get(7, 7), Some(false));
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(8, 0), None);
        assert_eq!(g.get(0, 8), None);
    }

    #[test]
    fn test_set_and_toggle() {
        let mut g = Glyph::new(FontSize::S8x8);
        assert!(g.set(3, 4, true));
        assert_eq!(g.get(3, 4), Some(true));
        assert_eq!(g.toggle(3, 4), Some(false));
        assert_eq!(g.toggle(3, 4), Some(true));
        assert!(!g.set(8, 0, true));
        assert_eq!(g.toggle(-1, 0), None);
    }

    #[test]
    fn test_translate_zero_is_identity() {
        let g = glyph_with(FontSize::S8x8, &[(0, 0), (3, 5), (7, 7)]);
        assert_eq!(g.translated(0, 0), g);
    }

    #[test]
    fn test_translate_discards_out_of_bounds() {
        let g = glyph_with(FontSize::S8x8, &[(0, 0), (4, 4)]);
        let shifted = g.translated(-1, 0);
        // (0,0) fell off the left edge; (4,4) moved to (3,4).
        assert_eq!(shifted.get(3, 4), Some(true));
        assert_eq!(shifted.cells().iter().filter(|&&c| c).count(), 1);

        // Shifting back does not resurrect the lost cell.
        let back = shifted.translated(1, 0);
        assert_eq!(back.get(0, 0), Some(false));
        assert_eq!(back.get(4, 4), Some(true));
    }

    #[test]
    fn test_flip_twice_is_identity() {
        let g = glyph_with(FontSize::S16x24, &[(0, 0), (5, 11), (15, 23)]);
        assert_eq!(g.flipped(true, false).flipped(true, false), g);
        assert_eq!(g.flipped(false, true).flipped(false, true), g);
        assert_eq!(g.flipped(true, true).flipped(true, true), g);
    }

    #[test]
    fn test_flip_moves_cells() {
        let g = glyph_with(FontSize::S8x8, &[(1, 2)]);
        assert_eq!(g.flipped(true, false).get(6, 2), Some(true));
        assert_eq!(g.flipped(false, true).get(1, 5), Some(true));
    }

    #[test]
    fn test_mirror_left_to_right_keeps_left_half() {
        let g = glyph_with(FontSize::S8x8, &[(1, 3), (6, 0)]);
        let m = g.mirrored_left_to_right();
        // Left half survives, right half is overwritten by its mirror.
        assert_eq!(m.get(1, 3), Some(true));
        assert_eq!(m.get(6, 3), Some(true));
        assert_eq!(m.get(6, 0), Some(false));
    }

    #[test]
    fn test_mirror_is_idempotent() {
        let g = glyph_with(FontSize::S8x8, &[(0, 0), (2, 6), (5, 1)]);
        let once = g.mirrored_left_to_right();
        assert_eq!(once.mirrored_left_to_right(), once);
        let once = g.mirrored_top_to_bottom();
        assert_eq!(once.mirrored_top_to_bottom(), once);
    }

    #[test]
    fn test_mirror_top_to_bottom() {
        let g = glyph_with(FontSize::S8x16, &[(2, 1)]);
        let m = g.mirrored_top_to_bottom();
        assert_eq!(m.get(2, 1), Some(true));
        assert_eq!(m.get(2, 14), Some(true));
    }

    #[test]
    fn test_merge_is_cellwise_or() {
        let a = glyph_with(FontSize::S8x8, &[(0, 0)]);
        let b = glyph_with(FontSize::S8x8, &[(7, 7)]);
        let merged = a.merged(&b);
        assert_eq!(merged.get(0, 0), Some(true));
        assert_eq!(merged.get(7, 7), Some(true));
        assert_eq!(merged.cells().iter().filter(|&&c| c).count(), 2);
    }

    #[test]
    fn test_merge_size_mismatch_is_noop() {
        let a = glyph_with(FontSize::S8x8, &[(0, 0)]);
        let b = Glyph::new(FontSize::S16x16);
        assert_eq!(a.merged(&b), a);
    }
}
