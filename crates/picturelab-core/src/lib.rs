//! Picturelab Core - Basic data structures for pixel grid processing
//!
//! This crate provides the fundamental data structures used throughout
//! the picturelab image library:
//!
//! - [`Pixel`] - A single mutable RGB color triple
//! - [`Grid`] - The main image container, a fixed-size row-major grid of pixels
//! - [`PixelAccess`] - The capability every transformation is written against
//! - [`Rect`] - Rectangle regions addressed by (row, col)
//! - [`Offset`] - The eight neighbor directions, with clamped neighbor lookup
//!
//! Coordinates are always `(row, col)`, with row 0 at the top.

pub mod access;
pub mod error;
pub mod grid;
pub mod neighbor;
pub mod pixel;
pub mod rect;

pub use access::PixelAccess;
pub use color::Rgb;
pub use error::{Error, Result};
pub use grid::Grid;
pub use neighbor::{Offset, neighbor, neighbor_coord};
pub use pixel::{Channel, Pixel};
pub use rect::Rect;

/// Color triples and helper functions for RGB values.
///
/// A color is carried around as a plain `(red, green, blue)` tuple; a
/// [`Pixel`] is the mutable cell that stores one.
pub mod color {
    /// An `(red, green, blue)` color triple.
    pub type Rgb = (u8, u8, u8);

    /// Pure black
    pub const BLACK: Rgb = (0, 0, 0);

    /// Pure white
    pub const WHITE: Rgb = (255, 255, 255);

    /// Euclidean distance between two colors in RGB space.
    ///
    /// `sqrt((r1-r2)^2 + (g1-g2)^2 + (b1-b2)^2)`
    #[inline]
    pub fn distance(a: Rgb, b: Rgb) -> f64 {
        let dr = a.0 as f64 - b.0 as f64;
        let dg = a.1 as f64 - b.1 as f64;
        let db = a.2 as f64 - b.2 as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Unweighted mean of the three channels, truncated.
    #[inline]
    pub fn lightness(rgb: Rgb) -> u8 {
        ((rgb.0 as u32 + rgb.1 as u32 + rgb.2 as u32) / 3) as u8
    }

}
