//! png2gba - Convert PNG images into GBA data tables
//!
//! Reads a PNG image and writes a C header file containing the pixel data
//! as arrays ready to compile into a Game Boy Advance program.

use clap::Parser;
use image::{DynamicImage, GenericImageView};
use png2gba::{gba_encode, write_c_header, EncodeOptions, PaletteSize};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "png2gba")]
#[command(version)]
#[command(about = "Convert PNG images into GBA data tables", long_about = None)]
struct Cli {
    /// Input PNG file (must be RGB or RGBA)
    input: PathBuf,

    /// Output C header file (default: input with .h extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit palette indices instead of direct color words (16 or 256 colors)
    #[arg(short, long, value_name = "SIZE")]
    palette: Option<u16>,

    /// Reorder pixels into 8x8 tiles (dimensions must be multiples of 8)
    #[arg(short, long)]
    tiled: bool,

    /// Transparent color key, reserved as palette index 0
    #[arg(short, long, default_value = "#ff00ff", value_name = "#RRGGBB")]
    color_key: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let img = image::open(&cli.input)
        .map_err(|e| format!("Failed to open '{}': {}", cli.input.display(), e))?;
    let (width, height) = img.dimensions();

    // The GBA formats carry no alpha, so only 8-bit RGB and RGBA input
    // makes sense; anything else (indexed, grayscale, 16-bit) is rejected
    // rather than silently converted.
    let (pixels, channels) = match img {
        DynamicImage::ImageRgb8(buf) => (buf.into_raw(), 3),
        DynamicImage::ImageRgba8(buf) => (buf.into_raw(), 4),
        other => {
            return Err(format!(
                "'{}' is not an RGB or RGBA image ({:?})",
                cli.input.display(),
                other.color()
            )
            .into())
        }
    };

    let palette = cli.palette.map(PaletteSize::try_from).transpose()?;
    let opts = EncodeOptions {
        palette,
        tiled: cli.tiled,
        color_key: cli.color_key.clone(),
    };

    eprintln!(
        "Encoding '{}' ({}x{}, {}){}{}",
        cli.input.display(),
        width,
        height,
        if channels == 3 { "RGB" } else { "RGBA" },
        match palette {
            Some(size) => format!(", {}-color palette", size.capacity()),
            None => ", direct color".to_string(),
        },
        if cli.tiled { ", tiled" } else { "" },
    );

    let encoded = gba_encode(&pixels, width as usize, height as usize, channels, &opts)?;

    let name = array_name(&cli.input);
    let header = write_c_header(&encoded, &name);

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("h"));
    fs::write(&output, &header)
        .map_err(|e| format!("Failed to write '{}': {}", output.display(), e))?;
    eprintln!("Written {} bytes to '{}'", header.len(), output.display());

    Ok(())
}

/// Derive a C identifier for the generated arrays from the input file stem.
fn array_name(path: &std::path::Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
