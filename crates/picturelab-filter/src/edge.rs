//! Edge detection
//!
//! Both detectors compare Euclidean RGB distances against a threshold
//! `edge_dist` and rewrite the grid in place: black for edge pixels,
//! white otherwise.
//!
//! # Simple detector
//!
//! [`edge_detection`] walks rows top to bottom and columns left to right,
//! skipping the last column, which keeps its input colors. A pixel is an
//! edge when its distance to the right neighbor or to the bottom neighbor
//! exceeds `edge_dist`. On the last row the bottom neighbor is the pixel
//! itself. Neighbor colors are read before the current pixel is written,
//! and since both neighbors lie ahead in scan order they still hold input
//! colors when read.
//!
//! # Paired detector
//!
//! [`edge_detection_paired`] first measures the distances to all eight
//! neighbors (with per-axis fallback at the border, see
//! [`picturelab_core::neighbor`]) in [`Offset::NEIGHBORS`] order, then
//! compares the pairs `(0, 4)`, `(1, 5)`, `(2, 6)`, `(3, 7)` of that
//! enumeration. A pixel is an edge when, for some pair, one distance is
//! strictly above `edge_dist` and the other strictly below. Decisions are
//! collected in an [`EdgeMask`] before any pixel is rewritten.
//!
//! # Negative thresholds
//!
//! Any threshold is accepted except NaN. Distances are never negative, so
//! below zero the simple detector marks every visited pixel and the paired
//! detector marks none.

use crate::{FilterError, FilterResult};
use picturelab_core::{Offset, PixelAccess, color, neighbor};

fn check_edge_dist(edge_dist: f64) -> FilterResult<()> {
    if edge_dist.is_nan() {
        return Err(FilterError::InvalidParameters(
            "edge distance must not be NaN".to_string(),
        ));
    }
    Ok(())
}

/// Mark high-contrast pixels using the right and bottom neighbors.
///
/// Returns the number of pixels turned black.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `edge_dist` is NaN.
pub fn edge_detection<G: PixelAccess>(grid: &mut G, edge_dist: f64) -> FilterResult<usize> {
    check_edge_dist(edge_dist)?;

    let height = grid.height();
    let width = grid.width();
    if height == 0 || width == 0 {
        return Ok(0);
    }
    let last_row = height - 1;
    let mut edges = 0usize;

    for row in 0..height {
        for col in 0..width.saturating_sub(1) {
            let current = grid.get_color(row, col);
            let right = grid.get_color(row, col + 1);
            let bottom_row = if row == last_row { row } else { row + 1 };
            let bottom = grid.get_color(bottom_row, col);

            if color::distance(current, right) > edge_dist
                || color::distance(current, bottom) > edge_dist
            {
                grid.set_color(row, col, color::BLACK);
                edges += 1;
            } else {
                grid.set_color(row, col, color::WHITE);
            }
        }
    }

    log::debug!(
        "edge_detection: {} edge pixels in {}x{} (edge_dist {})",
        edges,
        height,
        width,
        edge_dist
    );
    Ok(edges)
}

/// Check whether one of `a` and `b` is above `edge_dist` and the other
/// below it. Equality on either side never counts.
#[inline]
pub fn edge_pair(a: f64, b: f64, edge_dist: f64) -> bool {
    (a > edge_dist && b < edge_dist) || (a < edge_dist && b > edge_dist)
}

/// Per-pixel edge decisions, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    height: u32,
    width: u32,
    data: Vec<bool>,
}

impl EdgeMask {
    fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            data: vec![false; (height as usize) * (width as usize)],
        }
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether (row, col) is an edge pixel.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn is_edge(&self, row: u32, col: u32) -> bool {
        assert!(row < self.height && col < self.width);
        self.data[self.index(row, col)]
    }

    /// Number of edge pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }

    fn set(&mut self, row: u32, col: u32, edge: bool) {
        let idx = self.index(row, col);
        self.data[idx] = edge;
    }
}

/// Distances from (row, col) to its eight neighbors, in
/// [`Offset::NEIGHBORS`] order.
fn neighbor_distances<G: PixelAccess>(grid: &G, row: u32, col: u32) -> [f64; 8] {
    let pix = grid.pixel(row, col);
    let mut distances = [0.0; 8];
    for (slot, &offset) in distances.iter_mut().zip(Offset::NEIGHBORS.iter()) {
        *slot = pix.color_distance(&neighbor(grid, row, col, offset));
    }
    distances
}

/// First pass of the paired detector: decide every pixel without
/// modifying the grid.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `edge_dist` is NaN.
pub fn edge_mask<G: PixelAccess>(grid: &G, edge_dist: f64) -> FilterResult<EdgeMask> {
    check_edge_dist(edge_dist)?;

    let mut mask = EdgeMask::new(grid.height(), grid.width());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let distances = neighbor_distances(grid, row, col);
            for i in 0..4 {
                if edge_pair(distances[i], distances[i + 4], edge_dist) {
                    mask.set(row, col, true);
                    break;
                } else {
                    mask.set(row, col, false);
                }
            }
        }
    }
    Ok(mask)
}

/// Mark pixels that differ strongly from a neighbor on one side but not
/// from the paired neighbor.
///
/// Works better than [`edge_detection`] for larger values of `edge_dist`.
/// Returns the mask that was applied.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `edge_dist` is NaN.
pub fn edge_detection_paired<G: PixelAccess>(
    grid: &mut G,
    edge_dist: f64,
) -> FilterResult<EdgeMask> {
    let mask = edge_mask(grid, edge_dist)?;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let rgb = if mask.is_edge(row, col) {
                color::BLACK
            } else {
                color::WHITE
            };
            grid.set_color(row, col, rgb);
        }
    }

    log::debug!(
        "edge_detection_paired: {} edge pixels in {}x{} (edge_dist {})",
        mask.count(),
        grid.height(),
        grid.width(),
        edge_dist
    );
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturelab_core::Grid;

    #[test]
    fn test_edge_pair_is_strict() {
        assert!(edge_pair(20.0, 5.0, 10.0));
        assert!(edge_pair(5.0, 20.0, 10.0));
        assert!(!edge_pair(10.0, 0.0, 10.0));
        assert!(!edge_pair(20.0, 10.0, 10.0));
        assert!(!edge_pair(20.0, 30.0, 10.0));
        assert!(!edge_pair(1.0, 2.0, 10.0));
    }

    #[test]
    fn test_nan_edge_dist_rejected() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(edge_detection(&mut grid, f64::NAN).is_err());
        assert!(edge_detection_paired(&mut grid, f64::NAN).is_err());
        assert!(edge_mask(&grid, f64::NAN).is_err());
        assert_eq!(grid.count_color(color::BLACK), 4);
    }

    #[test]
    fn test_simple_negative_edge_dist_marks_every_visited_pixel() {
        let mut grid = Grid::filled(3, 4, (40, 80, 120)).unwrap();
        assert_eq!(edge_detection(&mut grid, -1.0).unwrap(), 9);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.get_color(row, col), color::BLACK);
            }
            assert_eq!(grid.get_color(row, 3), (40, 80, 120));
        }
    }

    #[test]
    fn test_paired_negative_edge_dist_marks_nothing() {
        let mut grid = Grid::from_fn(3, 3, |r, c| ((r * 100) as u8, (c * 100) as u8, 0)).unwrap();
        let mask = edge_detection_paired(&mut grid, -0.5).unwrap();
        assert_eq!(mask.count(), 0);
        assert_eq!(grid.count_color(color::WHITE), 9);
    }

    #[test]
    fn test_simple_distance_equal_to_threshold_is_not_edge() {
        // (0, 0, 0) to (3, 4, 0) is exactly 5
        let mut grid = Grid::from_fn(1, 2, |_, c| if c == 0 { (0, 0, 0) } else { (3, 4, 0) })
            .unwrap();
        assert_eq!(edge_detection(&mut grid, 5.0).unwrap(), 0);
        assert_eq!(grid.get_color(0, 0), color::WHITE);

        let mut grid = Grid::from_fn(1, 2, |_, c| if c == 0 { (0, 0, 0) } else { (3, 4, 0) })
            .unwrap();
        assert_eq!(edge_detection(&mut grid, 4.99).unwrap(), 1);
        assert_eq!(grid.get_color(0, 0), color::BLACK);
    }

    #[test]
    fn test_simple_uniform_is_white_except_last_column() {
        let mut grid = Grid::filled(3, 4, (40, 80, 120)).unwrap();
        let edges = edge_detection(&mut grid, 0.0).unwrap();
        assert_eq!(edges, 0);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.get_color(row, col), color::WHITE);
            }
            assert_eq!(grid.get_color(row, 3), (40, 80, 120));
        }
    }

    #[test]
    fn test_simple_vertical_boundary() {
        // Left half black, right half white
        let mut grid =
            Grid::from_fn(2, 4, |_, c| if c < 2 { color::BLACK } else { color::WHITE }).unwrap();
        edge_detection(&mut grid, 10.0).unwrap();
        for row in 0..2 {
            assert_eq!(grid.get_color(row, 0), color::WHITE);
            assert_eq!(grid.get_color(row, 1), color::BLACK);
            assert_eq!(grid.get_color(row, 2), color::WHITE);
        }
    }

    #[test]
    fn test_simple_last_row_compares_with_itself() {
        // Only the bottom row differs, and only vertically
        let mut grid =
            Grid::from_fn(2, 2, |r, _| if r == 0 { color::BLACK } else { color::WHITE }).unwrap();
        edge_detection(&mut grid, 10.0).unwrap();
        assert_eq!(grid.get_color(0, 0), color::BLACK);
        assert_eq!(grid.get_color(1, 0), color::WHITE);
    }

    #[test]
    fn test_simple_single_column_untouched() {
        let mut grid = Grid::filled(3, 1, (1, 2, 3)).unwrap();
        assert_eq!(edge_detection(&mut grid, 0.0).unwrap(), 0);
        assert_eq!(grid.count_color((1, 2, 3)), 3);
    }

    #[test]
    fn test_paired_uniform_is_all_white() {
        let mut grid = Grid::filled(4, 5, (90, 10, 200)).unwrap();
        let mask = edge_detection_paired(&mut grid, 5.0).unwrap();
        assert_eq!(mask.count(), 0);
        assert_eq!(grid.count_color(color::WHITE), 20);
    }

    #[test]
    fn test_paired_one_sided_difference() {
        // (1, 1) is the up-left neighbor (index 0) of (2, 2); its pair is
        // the right neighbor (index 4), which matches (2, 2).
        let mut grid = Grid::filled(5, 5, (100, 100, 100)).unwrap();
        grid.set_color(1, 1, color::WHITE);
        let mask = edge_detection_paired(&mut grid, 50.0).unwrap();
        assert!(mask.is_edge(2, 2));
        assert_eq!(grid.get_color(2, 2), color::BLACK);
        // Far away from the odd pixel nothing changes
        assert!(!mask.is_edge(4, 4));
        assert_eq!(grid.get_color(4, 4), color::WHITE);
    }

    #[test]
    fn test_paired_surrounded_pixel_is_not_edge() {
        // Every neighbor of the center differs equally: no pair splits
        let mut grid = Grid::filled(3, 3, color::BLACK).unwrap();
        grid.set_color(1, 1, color::WHITE);
        let mask = edge_mask(&grid, 50.0).unwrap();
        assert!(!mask.is_edge(1, 1));
    }

    #[test]
    fn test_paired_corner_sees_itself() {
        // At (0, 0) neighbors 0, 1, 3 fall back to the pixel itself
        // (distance 0) while neighbor 4 is (0, 1).
        let mut grid = Grid::filled(3, 3, color::BLACK).unwrap();
        grid.set_color(0, 0, color::WHITE);
        let mask = edge_mask(&grid, 50.0).unwrap();
        assert!(mask.is_edge(0, 0));
    }

    #[test]
    fn test_paired_mask_is_computed_before_writing() {
        let grid = Grid::from_fn(4, 4, |r, c| ((r * 60) as u8, (c * 60) as u8, 0)).unwrap();
        let expected = edge_mask(&grid, 70.0).unwrap();
        let mut out = grid.clone();
        let applied = edge_detection_paired(&mut out, 70.0).unwrap();
        assert_eq!(expected, applied);
        assert_eq!(out.count_color(color::BLACK), expected.count());
    }
}
