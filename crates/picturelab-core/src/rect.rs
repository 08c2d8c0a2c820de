//! Rect - Rectangle regions
//!
//! A rectangle of grid cells addressed by its top-left (row, col) and its
//! extent. Bounds are half-open: a rect covers rows `[row, bottom())` and
//! columns `[col, right())`. Extents reaching past `u32::MAX` are cut
//! off there, which only matters for rects that are clipped against a
//! grid anyway.

use crate::error::{Error, Result};

/// A rectangle region of a grid
///
/// Unlike [`Grid`](crate::Grid), this is a small `Copy` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top row
    pub row: u32,
    /// Left column
    pub col: u32,
    /// Number of rows
    pub height: u32,
    /// Number of columns
    pub width: u32,
}

impl Rect {
    /// Create a rect from its top-left corner and extent.
    pub const fn new(row: u32, col: u32, height: u32, width: u32) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Create a rect from half-open row and column ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if an end lies before its start.
    pub fn from_bounds(start_row: u32, end_row: u32, start_col: u32, end_col: u32) -> Result<Self> {
        if end_row < start_row || end_col < start_col {
            return Err(Error::InvalidParameter(format!(
                "rect bounds must not be reversed: rows {}..{}, cols {}..{}",
                start_row, end_row, start_col, end_col
            )));
        }
        Ok(Self::new(
            start_row,
            start_col,
            end_row - start_row,
            end_col - start_col,
        ))
    }

    /// The rect covering a whole `height x width` grid.
    pub const fn covering(height: u32, width: u32) -> Self {
        Self::new(0, 0, height, width)
    }

    /// Bottom row (exclusive), saturating at `u32::MAX`.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.row.saturating_add(self.height)
    }

    /// Right column (exclusive), saturating at `u32::MAX`.
    #[inline]
    pub fn right(&self) -> u32 {
        self.col.saturating_add(self.width)
    }

    /// Number of cells covered.
    #[inline]
    pub fn area(&self) -> u64 {
        self.height as u64 * self.width as u64
    }

    /// Check whether the rect covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Check whether (row, col) is inside the rect.
    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.row && row < self.bottom() && col >= self.col && col < self.right()
    }

    /// Intersection of two rects, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let top = self.row.max(other.row);
        let left = self.col.max(other.col);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom <= top || right <= left {
            return None;
        }
        Some(Rect::new(top, left, bottom - top, right - left))
    }
}
