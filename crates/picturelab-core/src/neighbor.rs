//! Neighbor lookup with per-axis fallback
//!
//! Resolves one of the eight neighbor offsets of a pixel. An offset that
//! would leave the grid along an axis falls back to the pixel's own
//! coordinate on that axis, independently for rows and columns. Edge and
//! corner pixels therefore see themselves as some of their neighbors.

use crate::access::PixelAccess;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// A unit step to one of the eight neighbors.
///
/// `dx` moves along rows and `dy` along columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Row step, one of -1, 0, 1
    pub dx: i32,
    /// Column step, one of -1, 0, 1
    pub dy: i32,
}

impl Offset {
    /// The eight neighbor offsets in enumeration order: `dx` outer,
    /// `dy` inner, each from -1 to 1, skipping `(0, 0)`.
    ///
    /// ```text
    ///   0  1  2
    ///   3  .  4
    ///   5  6  7
    /// ```
    pub const NEIGHBORS: [Offset; 8] = [
        Offset::new_unchecked(-1, -1),
        Offset::new_unchecked(-1, 0),
        Offset::new_unchecked(-1, 1),
        Offset::new_unchecked(0, -1),
        Offset::new_unchecked(0, 1),
        Offset::new_unchecked(1, -1),
        Offset::new_unchecked(1, 0),
        Offset::new_unchecked(1, 1),
    ];

    /// Create an offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless both steps are in
    /// `{-1, 0, 1}` and at least one is non-zero.
    pub fn new(dx: i32, dy: i32) -> Result<Self> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) || (dx == 0 && dy == 0) {
            return Err(Error::InvalidParameter(format!(
                "neighbor offset must be a non-zero unit step: ({}, {})",
                dx, dy
            )));
        }
        Ok(Self { dx, dy })
    }

    /// Create an offset without validation
    pub const fn new_unchecked(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Resolve the coordinate of a neighbor.
///
/// Each axis is resolved on its own: if `row + dx` lies in `[0, height)`
/// it is used, otherwise `row` is kept. Columns likewise.
pub fn neighbor_coord<G: PixelAccess>(grid: &G, row: u32, col: u32, offset: Offset) -> (u32, u32) {
    let max_row = grid.height() as i64 - 1;
    let max_col = grid.width() as i64 - 1;

    let test_row = row as i64 + offset.dx as i64;
    let result_row = if (0..=max_row).contains(&test_row) {
        test_row as u32
    } else {
        row
    };

    let test_col = col as i64 + offset.dy as i64;
    let result_col = if (0..=max_col).contains(&test_col) {
        test_col as u32
    } else {
        col
    };

    (result_row, result_col)
}

/// Get a neighboring pixel, falling back per axis at the grid border.
///
/// # Panics
///
/// Panics if (row, col) itself is outside the grid.
pub fn neighbor<G: PixelAccess>(grid: &G, row: u32, col: u32, offset: Offset) -> Pixel {
    let (r, c) = neighbor_coord(grid, row, col, offset);
    grid.pixel(r, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn numbered(height: u32, width: u32) -> Grid {
        Grid::from_fn(height, width, |r, c| (r as u8, c as u8, 0)).unwrap()
    }

    #[test]
    fn test_offset_validation() {
        assert!(Offset::new(0, 0).is_err());
        assert!(Offset::new(2, 0).is_err());
        assert!(Offset::new(0, -2).is_err());
        assert_eq!(Offset::new(-1, 1).unwrap(), Offset { dx: -1, dy: 1 });
    }

    #[test]
    fn test_enumeration_order() {
        let expected = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        for (off, (dx, dy)) in Offset::NEIGHBORS.iter().zip(expected) {
            assert_eq!((off.dx, off.dy), (dx, dy));
        }
    }

    #[test]
    fn test_single_pixel_grid_is_its_own_neighbor() {
        let grid = Grid::filled(1, 1, (7, 8, 9)).unwrap();
        for off in Offset::NEIGHBORS {
            assert_eq!(neighbor_coord(&grid, 0, 0, off), (0, 0));
            assert_eq!(neighbor(&grid, 0, 0, off).get_color(), (7, 8, 9));
        }
    }

    #[test]
    fn test_corner_falls_back_on_both_axes() {
        let grid = numbered(3, 3);
        let up_left = Offset::new(-1, -1).unwrap();
        assert_eq!(neighbor_coord(&grid, 0, 0, up_left), (0, 0));
        assert_eq!(neighbor(&grid, 0, 0, up_left), grid.pixel(0, 0));
    }

    #[test]
    fn test_axes_resolved_independently() {
        let grid = numbered(3, 4);
        // Top edge: row falls back, column still moves
        assert_eq!(neighbor_coord(&grid, 0, 1, Offset::new(-1, 1).unwrap()), (0, 2));
        // Right edge: column falls back, row still moves
        assert_eq!(neighbor_coord(&grid, 1, 3, Offset::new(1, 1).unwrap()), (2, 3));
        // Bottom-right corner
        assert_eq!(neighbor_coord(&grid, 2, 3, Offset::new(1, 1).unwrap()), (2, 3));
    }

    #[test]
    fn test_interior_neighbors() {
        let grid = numbered(3, 3);
        let coords: Vec<_> = Offset::NEIGHBORS
            .iter()
            .map(|&off| neighbor_coord(&grid, 1, 1, off))
            .collect();
        assert_eq!(
            coords,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }
}
