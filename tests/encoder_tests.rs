use png2gba::{
    color_word, gba_encode, parse_hex_triplet, EncodeOptions, ImageData, PaletteSize, Png2GbaError,
};
use pretty_assertions::assert_eq;

/// Build an RGB buffer from a function of (row, col).
fn rgb_image(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        for col in 0..width {
            pixels.extend_from_slice(&f(row, col));
        }
    }
    pixels
}

#[test]
fn test_solid_red_8x8_direct_linear() {
    let rgb = rgb_image(8, 8, |_, _| [0xFF, 0x00, 0x00]);
    let encoded = gba_encode(&rgb, 8, 8, 3, &EncodeOptions::default()).unwrap();

    assert_eq!(color_word(255, 0, 0), 0x001F);
    assert_eq!(encoded.data, ImageData::Direct(vec![0x001F; 64]));
}

#[test]
fn test_direct_tiled_reorders_pixels() {
    // 16x8: left tile black, right tile white
    let rgb = rgb_image(16, 8, |_, col| if col < 8 { [0; 3] } else { [255; 3] });
    let opts = EncodeOptions {
        tiled: true,
        ..EncodeOptions::default()
    };
    let encoded = gba_encode(&rgb, 16, 8, 3, &opts).unwrap();

    let mut expected = vec![0x0000u16; 64];
    expected.extend(std::iter::repeat(0x7FFF).take(64));
    assert_eq!(encoded.data, ImageData::Direct(expected));
}

#[test]
fn test_two_color_image_indexed() {
    // 16x16: top half red, bottom half green
    let rgb = rgb_image(16, 16, |row, _| {
        if row < 8 {
            [0xFF, 0x00, 0x00]
        } else {
            [0x00, 0xFF, 0x00]
        }
    });
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors16),
        ..EncodeOptions::default()
    };
    let encoded = gba_encode(&rgb, 16, 16, 3, &opts).unwrap();

    let ImageData::Indexed { indices, palette } = encoded.data else {
        panic!("expected indexed data");
    };

    // key at 0, then the two image colors in traversal order
    assert_eq!(palette[0], parse_hex_triplet("#ff00ff").unwrap());
    assert_eq!(palette[1], color_word(255, 0, 0));
    assert_eq!(palette[2], color_word(0, 255, 0));
    assert_eq!(palette.len(), 16);

    assert_eq!(indices.len(), 256);
    assert!(
        indices.iter().all(|&i| i == 1 || i == 2),
        "index 0 is never emitted unless the image contains the key"
    );
    assert_eq!(&indices[..16], &[1; 16]);
    assert_eq!(&indices[240..], &[2; 16]);
}

#[test]
fn test_image_containing_the_color_key_emits_index_zero() {
    let rgb = rgb_image(2, 1, |_, col| if col == 0 { [0xFF, 0x00, 0xFF] } else { [0; 3] });
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors16),
        ..EncodeOptions::default()
    };
    let encoded = gba_encode(&rgb, 2, 1, 3, &opts).unwrap();

    let ImageData::Indexed { indices, .. } = encoded.data else {
        panic!("expected indexed data");
    };
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_sixteen_distinct_colors_overflow_a_16_palette() {
    // 8x8 image whose first 16 pixels are distinct colors; with the key in
    // slot 0, the 15th new color trips the reserved-slot check
    let rgb = rgb_image(8, 8, |row, col| {
        let n = (row * 8 + col).min(15) as u8;
        [n << 4, 0, 0]
    });
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors16),
        ..EncodeOptions::default()
    };

    match gba_encode(&rgb, 8, 8, 3, &opts) {
        Err(Png2GbaError::PaletteOverflow { capacity }) => assert_eq!(capacity, 16),
        other => panic!("expected PaletteOverflow, got {other:?}"),
    }

    // the same image fits easily in a 256-entry palette
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors256),
        ..opts
    };
    assert!(gba_encode(&rgb, 8, 8, 3, &opts).is_ok());
}

#[test]
fn test_rgba_input_matches_rgb_input() {
    let rgb = rgb_image(4, 4, |row, col| [row as u8 * 40, col as u8 * 40, 0x80]);
    let mut rgba = Vec::with_capacity(4 * 4 * 4);
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(px);
        rgba.push(0x00); // fully transparent; alpha must not matter
    }

    let a = gba_encode(&rgb, 4, 4, 3, &EncodeOptions::default()).unwrap();
    let b = gba_encode(&rgba, 4, 4, 4, &EncodeOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tiled_indexed_roundtrip_against_linear() {
    // Tiled order is a permutation, so the palette sees the same color set
    // and the multiset of emitted indices matches linear mode
    let rgb = rgb_image(16, 8, |row, col| [((row + col) % 4) as u8 * 60, 0, 0]);
    let linear_opts = EncodeOptions {
        palette: Some(PaletteSize::Colors16),
        ..EncodeOptions::default()
    };
    let tiled_opts = EncodeOptions {
        tiled: true,
        ..linear_opts.clone()
    };

    let linear = gba_encode(&rgb, 16, 8, 3, &linear_opts).unwrap();
    let tiled = gba_encode(&rgb, 16, 8, 3, &tiled_opts).unwrap();

    let (ImageData::Indexed { indices: a, .. }, ImageData::Indexed { indices: b, .. }) =
        (linear.data, tiled.data)
    else {
        panic!("expected indexed data");
    };

    let mut a_sorted = a.clone();
    let mut b_sorted = b.clone();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    assert_eq!(a_sorted, b_sorted);
    assert_ne!(a, b, "tiled order should actually reorder this image");
}

#[test]
fn test_tiled_misalignment_fails_before_palette_work() {
    let rgb = rgb_image(10, 8, |_, _| [0; 3]);
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors16),
        tiled: true,
        ..EncodeOptions::default()
    };
    assert!(matches!(
        gba_encode(&rgb, 10, 8, 3, &opts),
        Err(Png2GbaError::NotTileAligned {
            width: 10,
            height: 8
        })
    ));
}

#[test]
fn test_custom_color_key() {
    let rgb = rgb_image(1, 1, |_, _| [0xFF, 0xFF, 0xFF]);
    let opts = EncodeOptions {
        palette: Some(PaletteSize::Colors256),
        color_key: "#123456".to_string(),
        ..EncodeOptions::default()
    };
    let encoded = gba_encode(&rgb, 1, 1, 3, &opts).unwrap();

    let ImageData::Indexed { palette, .. } = encoded.data else {
        panic!("expected indexed data");
    };
    assert_eq!(palette[0], parse_hex_triplet("#123456").unwrap());
}
