//! 24-bit uncompressed BMP output.
//!
//! Every module becomes a `SCALE x SCALE` block of black or white pixels, with
//! a `BORDER`-module white quiet zone. Rows are stored bottom-up as the format
//! requires, each padded with zero bytes to a multiple of four.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    encode::encoder::Symbol,
    foundation::{
        core::{BORDER, SCALE},
        error::QrsplitResult,
    },
};

/// Size of the file header plus the BITMAPINFOHEADER.
pub const BMP_HEADER_LEN: u32 = 54;

const INFO_HEADER_LEN: u32 = 40;
const BYTES_PER_PIXEL: u32 = 3;

const DARK_RGB: [u8; 3] = [0, 0, 0];
const LIGHT_RGB: [u8; 3] = [255, 255, 255];

/// Pixel dimensions and row layout of the image for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterGeometry {
    pub width: u32,
    pub height: u32,
    /// Zero bytes appended to each row (0..=3).
    pub row_padding: u32,
}

impl RasterGeometry {
    pub fn for_symbol(symbol: &Symbol) -> Self {
        let side = symbol.side() + 2 * BORDER as u32;
        let width = side * SCALE;
        let row_bytes = width * BYTES_PER_PIXEL;
        Self {
            width,
            height: width,
            row_padding: (4 - row_bytes % 4) % 4,
        }
    }

    /// Row length in bytes, padding included.
    pub fn padded_row_len(&self) -> u32 {
        self.width * BYTES_PER_PIXEL + self.row_padding
    }

    /// Bytes of pixel data.
    pub fn image_size(&self) -> u32 {
        self.padded_row_len() * self.height
    }

    pub fn file_size(&self) -> u32 {
        self.image_size() + BMP_HEADER_LEN
    }
}

/// BITMAPFILEHEADER + BITMAPINFOHEADER fields, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BmpHeader {
    file_size: u32,
    reserved: u32,
    data_offset: u32,
    info_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bits_per_pixel: u16,
    compression: u32,
    image_size: u32,
    x_pixels_per_meter: i32,
    y_pixels_per_meter: i32,
    colors_used: u32,
    colors_important: u32,
}

impl BmpHeader {
    fn new(geom: &RasterGeometry) -> Self {
        Self {
            file_size: geom.file_size(),
            reserved: 0,
            data_offset: BMP_HEADER_LEN,
            info_size: INFO_HEADER_LEN,
            // Bounded by (177 + 8) * 2, far inside i32.
            width: geom.width as i32,
            height: geom.height as i32,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: geom.image_size(),
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    fn to_bytes(self) -> [u8; BMP_HEADER_LEN as usize] {
        let mut out = [0u8; BMP_HEADER_LEN as usize];
        let mut pos = 0;
        let mut put = |bytes: &[u8]| {
            out[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        };
        put(b"BM");
        put(&self.file_size.to_le_bytes());
        put(&self.reserved.to_le_bytes());
        put(&self.data_offset.to_le_bytes());
        put(&self.info_size.to_le_bytes());
        put(&self.width.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.planes.to_le_bytes());
        put(&self.bits_per_pixel.to_le_bytes());
        put(&self.compression.to_le_bytes());
        put(&self.image_size.to_le_bytes());
        put(&self.x_pixels_per_meter.to_le_bytes());
        put(&self.y_pixels_per_meter.to_le_bytes());
        put(&self.colors_used.to_le_bytes());
        put(&self.colors_important.to_le_bytes());
        out
    }
}

/// Write the BMP for `symbol` to `out`: header first, then pixel rows.
pub fn write_bmp_to<W: Write + ?Sized>(out: &mut W, symbol: &Symbol) -> std::io::Result<()> {
    let geom = RasterGeometry::for_symbol(symbol);
    out.write_all(&BmpHeader::new(&geom).to_bytes())?;

    // Padding bytes stay zero; only the pixel prefix is rewritten per row.
    let mut row = vec![0u8; geom.padded_row_len() as usize];
    for y in (0..geom.height).rev() {
        let qr_y = (y / SCALE) as i32 - BORDER;
        for x in 0..geom.width {
            let qr_x = (x / SCALE) as i32 - BORDER;
            let rgb = if symbol.is_dark(qr_x, qr_y) {
                DARK_RGB
            } else {
                LIGHT_RGB
            };
            let at = (x * BYTES_PER_PIXEL) as usize;
            row[at..at + 3].copy_from_slice(&to_bgr(rgb));
        }
        out.write_all(&row)?;
    }
    Ok(())
}

fn to_bgr([r, g, b]: [u8; 3]) -> [u8; 3] {
    [b, g, r]
}

/// Encode the BMP for `symbol` in memory.
pub fn encode_bmp(symbol: &Symbol) -> QrsplitResult<Vec<u8>> {
    let geom = RasterGeometry::for_symbol(symbol);
    let mut out = Vec::with_capacity(geom.file_size() as usize);
    write_bmp_to(&mut out, symbol).context("encode image")?;
    Ok(out)
}

/// Create `path` and write the BMP for `symbol` into it.
///
/// The file is flushed and closed before returning.
#[tracing::instrument(skip(symbol), fields(side = symbol.side()))]
pub fn write_bmp(path: &Path, symbol: &Symbol) -> QrsplitResult<()> {
    let file =
        File::create(path).with_context(|| format!("create image '{}'", path.display()))?;
    let mut w = BufWriter::new(file);
    write_bmp_to(&mut w, symbol).with_context(|| format!("write image '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("flush image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/bmp.rs"]
mod tests;
