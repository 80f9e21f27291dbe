/* Copyright 2026 @TwoCookingMice */

use crate::lut::image::LutImage;

use std::fs::File;
use std::io::{BufWriter, Write};

const TGA_HEADER_LEN: usize = 18;
const TGA_UNCOMPRESSED_TRUECOLOR: u8 = 2;
const TGA_ORIGIN_TOP_LEFT: u8 = 1 << 5;

// Write an uncompressed 24-bit truecolor TGA to file. The pixel data is
// stored top row first, matching the top-left origin bit in the header.
// Width and height are truncated to 16 bits by the format itself.
pub fn write_tga_to_file(image: &LutImage, file_path: &str) -> std::io::Result<()> {
    log::info!("Starting writing TGA image: {}.", file_path);

    let mut header = [0u8; TGA_HEADER_LEN];
    header[2] = TGA_UNCOMPRESSED_TRUECOLOR;
    header[12..14].copy_from_slice(&(image.width() as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(image.height() as u16).to_le_bytes());
    header[16] = 24;
    header[17] = TGA_ORIGIN_TOP_LEFT;

    let mut file = BufWriter::new(File::create(file_path)?);
    file.write_all(&header)?;
    // TGA stores pixels as BGR; the LUT is grayscale so the triplets are
    // already channel-order agnostic.
    file.write_all(image.data())?;
    file.flush()?;

    log::info!("TGA written to: {}.", file_path);
    Ok(())
}
