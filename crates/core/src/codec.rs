//! Codec module - glyph and font <-> byte buffer conversion
//!
//! The `.rmsfont` on-disk format is a flat byte buffer with no header, magic
//! number, or version field: the per-glyph encodings for character codes
//! 32..126 concatenated in ascending order, no padding between glyphs.
//!
//! Bit order within a glyph is a compatibility contract with existing saved
//! files and must be preserved bit-for-bit: bits are walked column-major
//! (x outer over 0..width, y inner over 0..height), and bit `b` lands in
//! byte `b / 8` at bit `b % 8`, least significant bit first.
//!
//! Dimensions are inferred purely from total buffer length against the
//! closed size table; see [`detect_size`].

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_bitfont_types::{FontSize, GLYPH_COUNT};

use crate::font::Font;
use crate::glyph::Glyph;

/// Packed byte length of the largest supported glyph (24x32).
pub const MAX_GLYPH_BYTES: usize = 96;

/// Errors that can occur while decoding a font buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer length matches no supported size.
    #[error("file size {len} bytes does not match any supported font size")]
    SizeMismatch { len: usize },
}

/// Encode a single glyph into its packed byte form.
///
/// Allocation-free: the result lives in a fixed-capacity buffer sized for
/// the largest supported glyph.
pub fn encode_glyph(glyph: &Glyph) -> ArrayVec<u8, MAX_GLYPH_BYTES> {
    let len = (glyph.width() as usize * glyph.height() as usize + 7) / 8;
    let mut bytes = ArrayVec::new();
    for _ in 0..len {
        bytes.push(0u8);
    }

    let mut bit = 0usize;
    for x in 0..glyph.width() as i16 {
        for y in 0..glyph.height() as i16 {
            if glyph.get(x, y) == Some(true) {
                bytes[bit / 8] |= 1 << (bit % 8);
            }
            bit += 1;
        }
    }
    bytes
}

/// Decode one glyph from `bytes` starting at `offset`.
///
/// The traversal mirrors [`encode_glyph`] exactly. Bytes past the glyph's
/// stride are ignored; the caller guarantees the slice is long enough.
pub fn decode_glyph(bytes: &[u8], offset: usize, size: FontSize) -> Glyph {
    let mut glyph = Glyph::new(size);
    let mut bit = 0usize;
    for x in 0..size.width() as i16 {
        for y in 0..size.height() as i16 {
            let byte = bytes[offset + bit / 8];
            glyph.set(x, y, byte & (1 << (bit % 8)) != 0);
            bit += 1;
        }
    }
    glyph
}

/// Encode a whole font: per-glyph encodings for codes 32..126, concatenated.
pub fn encode_font(font: &Font) -> Vec<u8> {
    let mut out = Vec::with_capacity(font.size().file_len());
    for glyph in font.iter() {
        out.extend_from_slice(&encode_glyph(glyph));
    }
    out
}

/// Infer a font size from a buffer length.
///
/// Picks the first entry in the size table whose expected file length
/// matches. Two sizes could in principle share a length for 95 glyphs;
/// first match in table order wins.
pub fn detect_size(len: usize) -> Result<FontSize, CodecError> {
    FontSize::from_file_len(len).ok_or(CodecError::SizeMismatch { len })
}

/// Decode a whole font buffer, inferring its size from the length.
pub fn decode_font(bytes: &[u8]) -> Result<Font, CodecError> {
    let size = detect_size(bytes.len())?;
    let stride = size.bytes_per_glyph();
    let glyphs = (0..GLYPH_COUNT)
        .map(|i| decode_glyph(bytes, i * stride, size))
        .collect();
    Ok(Font::from_glyphs(size, glyphs))
}
