//! Export module - C header rendering of an encoded font
//!
//! A pure formatting transform over [`crate::codec::encode_font`]: the byte
//! buffer as a `const uint8_t` array in hex, 12 elements per line, followed
//! by length, width, height, and glyph-count constants.

use std::fmt::Write;

use tui_bitfont_types::GLYPH_COUNT;

use crate::codec::encode_font;
use crate::font::Font;

/// Hex elements per array line.
const BYTES_PER_LINE: usize = 12;

/// Array identifier for a font: `bitmap_font_{width}x{height}`.
pub fn array_name(font: &Font) -> String {
    format!(
        "bitmap_font_{}x{}",
        font.size().width(),
        font.size().height()
    )
}

/// Suggested file name for the header export.
pub fn header_file_name(font: &Font) -> String {
    format!("{}.h", array_name(font))
}

/// Suggested file name for the binary font save.
pub fn font_file_name(font: &Font) -> String {
    format!(
        "bitmap-font-{}x{}.rmsfont",
        font.size().width(),
        font.size().height()
    )
}

/// Render the whole font as C header source.
pub fn header_source(font: &Font) -> String {
    let bytes = encode_font(font);
    let name = array_name(font);

    let mut out = String::new();
    out.push_str("#include <stdint.h>\n\n");
    let _ = writeln!(out, "const uint8_t {}[] = {{", name);

    for (i, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let line: Vec<String> = chunk.iter().map(|b| format!("0x{:02x}", b)).collect();
        let last = (i + 1) * BYTES_PER_LINE >= bytes.len();
        let _ = writeln!(out, "  {}{}", line.join(", "), if last { "" } else { "," });
    }

    out.push_str("};\n");
    let _ = writeln!(out, "const unsigned int {}_length = {};", name, bytes.len());
    let _ = writeln!(
        out,
        "const unsigned int {}_width = {};",
        name,
        font.size().width()
    );
    let _ = writeln!(
        out,
        "const unsigned int {}_height = {};",
        name,
        font.size().height()
    );
    let _ = writeln!(
        out,
        "const unsigned int {}_glyph_count = {};",
        name, GLYPH_COUNT
    );
    out
}
