//! picturelab-io - Image file reading and writing
//!
//! Loads image files into a [`Grid`] and saves grids back to disk. The
//! core crates never depend on this one; it is the raster codec boundary.
//!
//! Supported formats (each behind a Cargo feature, all on by default):
//!
//! - PNG (`png-format`)
//! - JPEG (`jpeg`)
//! - PNM / PPM / PGM (`pnm`)

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use picturelab_core::Grid;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    let reader = BufReader::new(File::open(path)?);
    read_with_format(reader, format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Grid> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

#[allow(unused_variables, unused_mut)]
fn read_with_format<R: std::io::BufRead + std::io::Seek>(
    mut reader: R,
    format: ImageFormat,
) -> IoResult<Grid> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?} (format unknown or feature disabled)",
            other
        ))),
    }
}

/// Write a grid to a file.
///
/// When `format` is [`ImageFormat::Unknown`], the format is chosen from
/// the file extension.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => ImageFormat::from_path(path),
        f => f,
    };
    log::debug!(
        "writing {}x{} grid to {} as {:?}",
        grid.height(),
        grid.width(),
        path.display(),
        format
    );
    let writer = BufWriter::new(File::create(path)?);
    write_with_format(grid, writer, format)
}

/// Encode a grid into an in-memory buffer.
pub fn write_image_mem(grid: &Grid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_with_format(grid, &mut buf, format)?;
    Ok(buf)
}

#[allow(unused_variables)]
fn write_with_format<W: std::io::Write>(
    grid: &Grid,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(grid, writer, jpeg::DEFAULT_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?} (format unknown or feature disabled)",
            other
        ))),
    }
}
