//! Whole-grid mirrors
//!
//! Each mirror copies one half of the grid over the other, in place. The
//! copied half is unchanged; the overwritten half becomes its reflection.
//! For odd dimensions the middle column or row is never written.

use picturelab_core::PixelAccess;

/// Mirror about the vertical center line, left half onto right half.
///
/// For every row, column `col` in `[0, width / 2)` is copied to
/// `width - 1 - col`.
pub fn mirror_vertical<G: PixelAccess>(grid: &mut G) {
    let width = grid.width();
    for row in 0..grid.height() {
        for col in 0..width / 2 {
            grid.copy_color((row, col), (row, width - 1 - col));
        }
    }
}

/// Mirror about the vertical center line, right half onto left half.
///
/// Columns are visited from `width - 1` down to, but excluding,
/// `width / 2`.
pub fn mirror_vertical_right_to_left<G: PixelAccess>(grid: &mut G) {
    let width = grid.width();
    for row in 0..grid.height() {
        for col in (width / 2 + 1..width).rev() {
            grid.copy_color((row, col), (row, width - 1 - col));
        }
    }
}

/// Mirror about the horizontal center line, top half onto bottom half.
pub fn mirror_horizontal<G: PixelAccess>(grid: &mut G) {
    let height = grid.height();
    for row in 0..height / 2 {
        for col in 0..grid.width() {
            grid.copy_color((row, col), (height - 1 - row, col));
        }
    }
}

/// Mirror about the horizontal center line, bottom half onto top half.
///
/// Rows are visited from `height - 1` down to, but excluding,
/// `height / 2`.
pub fn mirror_horizontal_bottom_to_top<G: PixelAccess>(grid: &mut G) {
    let height = grid.height();
    for row in (height / 2 + 1..height).rev() {
        for col in 0..grid.width() {
            grid.copy_color((row, col), (height - 1 - row, col));
        }
    }
}

/// Mirror the top-left square about its main diagonal, lower-left
/// triangle onto upper-right triangle.
///
/// The square has side `min(height, width)`. For every diagonal index `d`
/// and every `a < d`, `(d, a)` is copied to `(a, d)`. Diagonal cells and
/// everything outside the square are left alone.
pub fn mirror_diagonal<G: PixelAccess>(grid: &mut G) {
    let side = grid.height().min(grid.width());
    for diag in 0..side {
        for a in 0..diag {
            grid.copy_color((diag, a), (a, diag));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturelab_core::Grid;

    /// Every cell gets a distinct color.
    fn numbered(height: u32, width: u32) -> Grid {
        Grid::from_fn(height, width, |r, c| (r as u8, c as u8, (r * width + c) as u8)).unwrap()
    }

    #[test]
    fn test_mirror_vertical_even() {
        let mut grid = numbered(3, 6);
        mirror_vertical(&mut grid);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.get_color(row, col), grid.get_color(row, 5 - col));
            }
        }
        // Left half untouched
        assert_eq!(grid.get_color(2, 1), (2, 1, 13));
    }

    #[test]
    fn test_mirror_vertical_odd_keeps_middle() {
        let original = numbered(2, 5);
        let mut grid = original.clone();
        mirror_vertical(&mut grid);
        assert_eq!(grid.get_color(1, 2), original.get_color(1, 2));
        assert_eq!(grid.get_color(1, 4), original.get_color(1, 0));
        assert_eq!(grid.get_color(1, 3), original.get_color(1, 1));
    }

    #[test]
    fn test_mirror_vertical_right_to_left() {
        let original = numbered(2, 4);
        let mut grid = original.clone();
        mirror_vertical_right_to_left(&mut grid);
        // width / 2 = 2 is excluded, so only column 3 is copied onto 0
        assert_eq!(grid.get_color(0, 0), original.get_color(0, 3));
        assert_eq!(grid.get_color(0, 1), original.get_color(0, 1));
        assert_eq!(grid.get_color(0, 2), original.get_color(0, 2));
    }

    #[test]
    fn test_mirror_vertical_right_to_left_odd() {
        let original = numbered(1, 5);
        let mut grid = original.clone();
        mirror_vertical_right_to_left(&mut grid);
        assert_eq!(grid.get_color(0, 0), original.get_color(0, 4));
        assert_eq!(grid.get_color(0, 1), original.get_color(0, 3));
        assert_eq!(grid.get_color(0, 2), original.get_color(0, 2));
    }

    #[test]
    fn test_mirror_horizontal() {
        let original = numbered(5, 2);
        let mut grid = original.clone();
        mirror_horizontal(&mut grid);
        assert_eq!(grid.get_color(4, 1), original.get_color(0, 1));
        assert_eq!(grid.get_color(3, 0), original.get_color(1, 0));
        assert_eq!(grid.get_color(2, 0), original.get_color(2, 0));
    }

    #[test]
    fn test_mirror_horizontal_bottom_to_top() {
        let original = numbered(5, 2);
        let mut grid = original.clone();
        mirror_horizontal_bottom_to_top(&mut grid);
        assert_eq!(grid.get_color(0, 0), original.get_color(4, 0));
        assert_eq!(grid.get_color(1, 1), original.get_color(3, 1));
        assert_eq!(grid.get_color(2, 1), original.get_color(2, 1));
        assert_eq!(grid.get_color(4, 0), original.get_color(4, 0));
    }

    #[test]
    fn test_mirror_diagonal_square() {
        let original = numbered(4, 4);
        let mut grid = original.clone();
        mirror_diagonal(&mut grid);
        for d in 0..4 {
            assert_eq!(grid.get_color(d, d), original.get_color(d, d));
            for a in 0..d {
                assert_eq!(grid.get_color(a, d), original.get_color(d, a));
                assert_eq!(grid.get_color(d, a), original.get_color(d, a));
            }
        }
    }

    #[test]
    fn test_mirror_diagonal_wide_grid_leaves_outside_square() {
        let original = numbered(2, 5);
        let mut grid = original.clone();
        mirror_diagonal(&mut grid);
        assert_eq!(grid.get_color(0, 1), original.get_color(1, 0));
        for col in 2..5 {
            assert_eq!(grid.get_color(0, col), original.get_color(0, col));
            assert_eq!(grid.get_color(1, col), original.get_color(1, col));
        }
    }

    #[test]
    fn test_single_column_mirrors_are_noops() {
        let original = numbered(3, 1);
        let mut grid = original.clone();
        mirror_vertical(&mut grid);
        mirror_vertical_right_to_left(&mut grid);
        assert_eq!(grid, original);
    }
}
