//! PNM (Portable Any Map) image format support
//!
//! Reads PGM and PPM in both ASCII (P2, P3) and binary (P5, P6) variants.
//! Gray images are expanded to RGB. Samples with a maxval other than 255
//! are rescaled to 8 bits. Writing always produces binary PPM (P6).

use crate::{IoError, IoResult};
use picturelab_core::{Grid, Pixel};
use std::io::{Read, Write};

/// Cursor over the header and ASCII raster tokens.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments.
    fn skip_space(&mut self) {
        while self.pos < self.data.len() {
            match self.data[self.pos] {
                b'#' => {
                    while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_space();
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::Malformed("unexpected end of PNM data".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn next_u32(&mut self) -> IoResult<u32> {
        let tok = self.next_token()?;
        std::str::from_utf8(tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::Malformed(format!(
                    "invalid PNM number: {:?}",
                    String::from_utf8_lossy(tok)
                ))
            })
    }

    /// Consume the single whitespace byte that separates the header from
    /// a binary raster, and return the rest.
    fn raster(&mut self) -> IoResult<&'a [u8]> {
        if self.pos >= self.data.len() || !self.data[self.pos].is_ascii_whitespace() {
            return Err(IoError::Malformed(
                "missing separator before PNM raster".to_string(),
            ));
        }
        Ok(&self.data[self.pos + 1..])
    }
}

fn scale_sample(value: u32, maxval: u32) -> IoResult<u8> {
    if value > maxval {
        return Err(IoError::Malformed(format!(
            "PNM sample {} exceeds maxval {}",
            value, maxval
        )));
    }
    if maxval == 255 {
        Ok(value as u8)
    } else {
        Ok(((value * 255 + maxval / 2) / maxval) as u8)
    }
}

/// Read a PNM image
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Grid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut tokens = Tokens::new(&data);
    let magic = tokens.next_token()?;
    let (channels, binary) = match magic {
        b"P2" => (1usize, false),
        b"P3" => (3, false),
        b"P5" => (1, true),
        b"P6" => (3, true),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {}",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = tokens.next_u32()?;
    let height = tokens.next_u32()?;
    let maxval = tokens.next_u32()?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::Malformed(format!("invalid PNM maxval: {}", maxval)));
    }

    let count = (width as usize) * (height as usize) * channels;
    let samples: Vec<u8> = if binary {
        let raster = tokens.raster()?;
        let wide = maxval > 255;
        let bytes_per_sample = if wide { 2 } else { 1 };
        if raster.len() < count * bytes_per_sample {
            return Err(IoError::Malformed(format!(
                "PNM raster too short: {} bytes for {} samples",
                raster.len(),
                count
            )));
        }
        if wide {
            raster
                .chunks_exact(2)
                .take(count)
                .map(|b| scale_sample(((b[0] as u32) << 8) | b[1] as u32, maxval))
                .collect::<IoResult<_>>()?
        } else {
            raster[..count]
                .iter()
                .map(|&b| scale_sample(b as u32, maxval))
                .collect::<IoResult<_>>()?
        }
    } else {
        (0..count)
            .map(|_| tokens.next_u32().and_then(|v| scale_sample(v, maxval)))
            .collect::<IoResult<_>>()?
    };

    let pixels = samples
        .chunks_exact(channels)
        .map(|s| match channels {
            1 => Pixel::new(s[0], s[0], s[0]),
            _ => Pixel::new(s[0], s[1], s[2]),
        })
        .collect();
    let grid = Grid::from_pixels(height, width, pixels)?;
    log::debug!("read PNM {}x{} (maxval {})", height, width, maxval);
    Ok(grid)
}

/// Write a grid as binary PPM (P6)
pub fn write_pnm<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;
    let mut raster = Vec::with_capacity(grid.pixels().len() * 3);
    for pix in grid.pixels() {
        raster.extend_from_slice(&[pix.red(), pix.green(), pix.blue()]);
    }
    writer.write_all(&raster)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturelab_core::PixelAccess;

    #[test]
    fn test_read_ascii_ppm_with_comments() {
        let text = b"P3\n# a comment\n2 1\n255\n255 0 0  0 0 255\n";
        let grid = read_pnm(&text[..]).unwrap();
        assert_eq!(grid.dimensions(), (1, 2));
        assert_eq!(grid.get_color(0, 0), (255, 0, 0));
        assert_eq!(grid.get_color(0, 1), (0, 0, 255));
    }

    #[test]
    fn test_read_ascii_pgm_expands_to_rgb() {
        let text = b"P2 1 2 15 0 15";
        let grid = read_pnm(&text[..]).unwrap();
        assert_eq!(grid.get_color(0, 0), (0, 0, 0));
        assert_eq!(grid.get_color(1, 0), (255, 255, 255));
    }

    #[test]
    fn test_write_then_read_binary() {
        let grid = Grid::from_fn(3, 4, |r, c| (r as u8 * 50, c as u8 * 40, 7)).unwrap();
        let mut buf = Vec::new();
        write_pnm(&grid, &mut buf).unwrap();
        assert!(buf.starts_with(b"P6\n4 3\n255\n"));
        let back = read_pnm(&buf[..]).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_truncated_raster_rejected() {
        let data = b"P6\n2 2\n255\n\x01\x02\x03";
        assert!(matches!(read_pnm(&data[..]), Err(IoError::Malformed(_))));
    }

    #[test]
    fn test_sample_above_maxval_rejected() {
        let text = b"P3 1 1 100 101 0 0";
        assert!(read_pnm(&text[..]).is_err());
    }

    #[test]
    fn test_unsupported_variant() {
        assert!(matches!(
            read_pnm(&b"P4 1 1\n\x00"[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
