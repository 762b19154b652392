//! Render encoded data as a C header for inclusion in a GBA project.

use crate::encoder::{Encoded, ImageData};
use crate::TILE_SIZE;
use std::fmt::Write;

/// Render an [`Encoded`] image as C source.
///
/// Produces `#define {name}_width` / `#define {name}_height`, a
/// `{name}_data` array (`unsigned short` color words, or `unsigned char`
/// palette indices), and in indexed mode a `{name}_palette` array at the
/// palette's full fixed capacity. `name` should be a valid C identifier;
/// it is emitted verbatim.
#[must_use]
pub fn write_c_header(encoded: &Encoded, name: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "/* {name}.h\n * generated by png2gba */\n");
    let _ = writeln!(out, "#define {name}_width {}", encoded.width);
    let _ = writeln!(out, "#define {name}_height {}\n", encoded.height);

    match &encoded.data {
        ImageData::Direct(words) => {
            let _ = writeln!(out, "const unsigned short {name}_data [] = {{");
            write_values(&mut out, words.iter().map(|w| format!("0x{w:04X}")));
            out.push_str("};\n");
        }
        ImageData::Indexed { indices, palette } => {
            let _ = writeln!(out, "const unsigned char {name}_data [] = {{");
            write_values(&mut out, indices.iter().map(|i| format!("0x{i:02X}")));
            out.push_str("};\n\n");

            let _ = writeln!(out, "const unsigned short {name}_palette [] = {{");
            write_values(&mut out, palette.iter().map(|w| format!("0x{w:04x}")));
            out.push_str("};\n");
        }
    }

    out
}

/// Append comma-separated values, one tile row's worth per line.
fn write_values<I: ExactSizeIterator<Item = String>>(out: &mut String, values: I) {
    let last = values.len().saturating_sub(1);
    for (i, value) in values.enumerate() {
        if i % TILE_SIZE == 0 {
            out.push_str("    ");
        }
        out.push_str(&value);
        if i != last {
            out.push(',');
        }
        if i % TILE_SIZE == TILE_SIZE - 1 || i == last {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{gba_encode, EncodeOptions};
    use crate::palette::PaletteSize;

    #[test]
    fn test_direct_header_shape() {
        let rgb = vec![255u8; 2 * 1 * 3];
        let encoded = gba_encode(&rgb, 2, 1, 3, &EncodeOptions::default()).unwrap();
        let header = write_c_header(&encoded, "white");

        assert!(header.contains("#define white_width 2"));
        assert!(header.contains("#define white_height 1"));
        assert!(header.contains("const unsigned short white_data [] = {"));
        assert!(header.contains("0x7FFF, 0x7FFF"));
        assert!(!header.contains("white_palette"));
    }

    #[test]
    fn test_indexed_header_has_full_palette_table() {
        let rgb = vec![0u8; 8 * 8 * 3];
        let opts = EncodeOptions {
            palette: Some(PaletteSize::Colors16),
            ..EncodeOptions::default()
        };
        let encoded = gba_encode(&rgb, 8, 8, 3, &opts).unwrap();
        let header = write_c_header(&encoded, "sprite");

        assert!(header.contains("const unsigned char sprite_data [] = {"));
        assert!(header.contains("const unsigned short sprite_palette [] = {"));
        // 16 palette entries regardless of how many are used
        let palette_section = header.split("sprite_palette").nth(1).unwrap();
        assert_eq!(palette_section.matches("0x").count(), 16);
    }
}
