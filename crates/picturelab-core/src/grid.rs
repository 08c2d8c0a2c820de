//! Grid - The main image container
//!
//! A `Grid` owns a fixed-size, row-major buffer of [`Pixel`]s. The
//! dimensions are set at construction and never change. Cloning a grid is
//! a deep copy: the clone owns new pixel values, not aliases.

use crate::access::PixelAccess;
use crate::color::{self, Rgb};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::fmt;

/// Fixed-size rectangular grid of RGB pixels
///
/// # Examples
///
/// ```
/// use picturelab_core::{Grid, PixelAccess};
///
/// let grid = Grid::new(480, 640).unwrap();
/// assert_eq!(grid.height(), 480);
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.get_color(0, 0), (0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows
    height: u32,
    /// Number of columns
    width: u32,
    /// Row-major pixel storage, `height * width` entries
    data: Vec<Pixel>,
}

impl Grid {
    /// Create a new black grid with the given number of rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(height: u32, width: u32) -> Result<Self> {
        Self::filled(height, width, color::BLACK)
    }

    /// Create a new grid with every pixel set to `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn filled(height: u32, width: u32, rgb: Rgb) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimension { height, width });
        }
        let len = (height as usize) * (width as usize);
        Ok(Grid {
            height,
            width,
            data: vec![Pixel::from_rgb(rgb); len],
        })
    }

    /// Create a new grid whose pixel at (row, col) is `f(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn from_fn<F>(height: u32, width: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut grid = Self::new(height, width)?;
        for row in 0..height {
            for col in 0..width {
                let idx = grid.index(row, col);
                grid.data[idx] = Pixel::from_rgb(f(row, col));
            }
        }
        Ok(grid)
    }

    /// Create a grid from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::InvalidParameter`] if `data` does not hold exactly
    /// `height * width` pixels.
    pub fn from_pixels(height: u32, width: u32, data: Vec<Pixel>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimension { height, width });
        }
        let expected = (height as usize) * (width as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} pixels for {}x{} grid, got {}",
                expected,
                height,
                width,
                data.len()
            )));
        }
        Ok(Grid {
            height,
            width,
            data,
        })
    }

    /// Get the number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Check whether two grids have the same dimensions.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of range for {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Borrow a pixel mutably.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    #[inline]
    pub fn pixel_mut(&mut self, row: u32, col: u32) -> &mut Pixel {
        let idx = self.index(row, col);
        &mut self.data[idx]
    }

    /// Borrow one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[Pixel] {
        let start = self.index(row, 0);
        &self.data[start..start + self.width as usize]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Count the pixels whose color equals `rgb`.
    pub fn count_color(&self, rgb: Rgb) -> usize {
        self.data.iter().filter(|p| p.get_color() == rgb).count()
    }

    /// Write grid metadata to a writer (for debugging).
    pub fn print_info(
        &self,
        writer: &mut impl std::io::Write,
        label: Option<&str>,
    ) -> std::io::Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Grid info for {text}:")?;
        }
        writeln!(writer, "    height = {}, width = {}", self.height, self.width)?;
        writeln!(writer, "    pixels = {}", self.data.len())
    }
}

impl PixelAccess for Grid {
    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn pixel(&self, row: u32, col: u32) -> Pixel {
        self.data[self.index(row, col)]
    }

    #[inline]
    fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel) {
        let idx = self.index(row, col);
        self.data[idx] = pixel;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid, height {} width {}", self.height, self.width)
    }
}
