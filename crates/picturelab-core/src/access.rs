//! Pixel access capability
//!
//! Every transformation in picturelab is written against [`PixelAccess`]
//! rather than a concrete image type. An implementor provides the grid
//! dimensions and unchecked by-value access; the checked accessors and
//! color conveniences come for free.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Read/write access to a rectangular grid of pixels addressed by (row, col).
pub trait PixelAccess {
    /// Number of rows.
    fn height(&self) -> u32;

    /// Number of columns.
    fn width(&self) -> u32;

    /// Get the pixel at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    fn pixel(&self, row: u32, col: u32) -> Pixel;

    /// Store a pixel at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel);

    /// Check whether (row, col) lies inside the grid.
    #[inline]
    fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height() && col < self.width()
    }

    /// Get the pixel at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is outside the grid.
    fn get(&self, row: u32, col: u32) -> Result<Pixel> {
        self.check(row as i64, col as i64)?;
        Ok(self.pixel(row, col))
    }

    /// Store a pixel at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is outside the grid.
    fn set(&mut self, row: u32, col: u32, pixel: Pixel) -> Result<()> {
        self.check(row as i64, col as i64)?;
        self.set_pixel(row, col, pixel);
        Ok(())
    }

    /// Validate a signed coordinate against the grid bounds.
    fn check(&self, row: i64, col: i64) -> Result<()> {
        let (h, w) = (self.height(), self.width());
        if row < 0 || col < 0 || row >= h as i64 || col >= w as i64 {
            return Err(Error::OutOfRange {
                row,
                col,
                height: h,
                width: w,
            });
        }
        Ok(())
    }

    /// Color of the pixel at (row, col).
    #[inline]
    fn get_color(&self, row: u32, col: u32) -> Rgb {
        self.pixel(row, col).get_color()
    }

    /// Overwrite the color of the pixel at (row, col).
    #[inline]
    fn set_color(&mut self, row: u32, col: u32, rgb: Rgb) {
        self.set_pixel(row, col, Pixel::from_rgb(rgb));
    }

    /// Copy the whole color of one cell onto another.
    #[inline]
    fn copy_color(&mut self, from: (u32, u32), to: (u32, u32)) {
        let rgb = self.get_color(from.0, from.1);
        self.set_color(to.0, to.1, rgb);
    }

    /// Apply `f` to every pixel in row-major order.
    fn for_each_pixel_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Pixel),
        Self: Sized,
    {
        for row in 0..self.height() {
            for col in 0..self.width() {
                let mut pix = self.pixel(row, col);
                f(&mut pix);
                self.set_pixel(row, col, pix);
            }
        }
    }
}
