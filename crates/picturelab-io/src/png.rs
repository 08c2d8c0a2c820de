//! PNG image format support

use crate::{IoError, IoResult};
use picturelab_core::{Grid, Pixel};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette, low bit depth and 16-bit images are normalized to 8-bit
/// samples by the decoder. Alpha is dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::decode("PNG", e))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::decode("PNG", "output buffer size overflows usize"))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::decode("PNG", e))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(samples).take(width as usize) {
            let pix = match samples {
                1 | 2 => Pixel::new(px[0], px[0], px[0]),
                _ => Pixel::new(px[0], px[1], px[2]),
            };
            pixels.push(pix);
        }
    }

    let grid = Grid::from_pixels(height, width, pixels)?;
    log::debug!("read PNG {}x{} ({:?})", height, width, color_type);
    Ok(grid)
}

/// Write a grid as an 8-bit RGB PNG
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::encode("PNG", e))?;

    let mut data = Vec::with_capacity(grid.pixels().len() * 3);
    for pix in grid.pixels() {
        data.extend_from_slice(&[pix.red(), pix.green(), pix.blue()]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::encode("PNG", e))?;
    writer
        .finish()
        .map_err(|e| IoError::encode("PNG", e))?;
    Ok(())
}
