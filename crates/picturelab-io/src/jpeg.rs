//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale and CMYK inputs are converted to RGB.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use picturelab_core::{Grid, Pixel};
use std::io::{Read, Write};

/// Default quality used by [`write_image`](crate::write_image).
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Grid> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::decode("JPEG", e))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::decode("JPEG", "no frame header"))?;

    let width = info.width as u32;
    let height = info.height as u32;

    #[allow(unreachable_patterns)]
    let pixels: Vec<Pixel> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| Pixel::new(g, g, g)).collect(),
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|b| Pixel::new(b[0], b[0], b[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|s| Pixel::new(s[0], s[1], s[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|s| {
                let k = s[3] as u32;
                let conv = |c: u8| (255 - ((c as u32 * (255 - k)) / 255 + k).min(255)) as u8;
                Pixel::new(conv(s[0]), conv(s[1]), conv(s[2]))
            })
            .collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let grid = Grid::from_pixels(height, width, pixels)?;
    log::debug!(
        "read JPEG {}x{} ({:?})",
        height,
        width,
        info.pixel_format
    );
    Ok(grid)
}

/// Write a grid as an RGB JPEG.
///
/// # Arguments
/// * `quality` - Encoder quality, 1 to 100
pub fn write_jpeg<W: Write>(grid: &Grid, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::encode(
            "JPEG",
            format_args!("quality must be in 1..=100, got {}", quality),
        ));
    }
    let too_large = |what: &str, v: u32| {
        IoError::encode("JPEG", format_args!("{} {} exceeds 65535", what, v))
    };
    let width = u16::try_from(grid.width()).map_err(|_| too_large("width", grid.width()))?;
    let height = u16::try_from(grid.height()).map_err(|_| too_large("height", grid.height()))?;

    let mut data = Vec::with_capacity(grid.pixels().len() * 3);
    for pix in grid.pixels() {
        data.extend_from_slice(&[pix.red(), pix.green(), pix.blue()]);
    }

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&data, width, height, ColorType::Rgb)
        .map_err(|e| IoError::encode("JPEG", e))
}
