//! Bounded mirrors
//!
//! Reflect a rectangle of the grid across a vertical or horizontal axis
//! that need not pass through the grid center. A source cell at column
//! `c` lands on column `2 * axis - c` (or likewise for rows). Source cells
//! are visited in row-major order, so when the rectangle straddles the
//! axis later reads may see earlier writes.
//!
//! Every source and destination coordinate is validated before the first
//! write. A rectangle that does not fit leaves the grid untouched.

use crate::TransformResult;
use picturelab_core::{PixelAccess, Rect};

/// Orientation of the mirror line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorAxis {
    /// Vertical line at a column; cells move left/right
    Vertical,
    /// Horizontal line at a row; cells move up/down
    Horizontal,
}

/// A bounded mirror: source rectangle plus mirror line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionMirror {
    /// Cells to reflect
    pub rect: Rect,
    /// Orientation of the mirror line
    pub axis: MirrorAxis,
    /// Column (vertical) or row (horizontal) of the mirror line
    pub position: u32,
}

impl RegionMirror {
    /// Completes the temple roof in the `temple.jpg` photo.
    pub const TEMPLE: Self = Self::vertical(Rect::new(27, 13, 70, 263), 276);

    /// Reflects the snowman's arms downward in `snowman.jpg`.
    pub const SNOWMAN_ARMS: Self = Self::horizontal(Rect::new(159, 102, 40, 198), 199);

    /// Adds a second gull to `seagull.jpg`.
    pub const SEAGULL: Self = Self::vertical(Rect::new(227, 233, 105, 116), 349);

    /// Reflect `rect` across the vertical line at column `axis_col`.
    pub const fn vertical(rect: Rect, axis_col: u32) -> Self {
        Self {
            rect,
            axis: MirrorAxis::Vertical,
            position: axis_col,
        }
    }

    /// Reflect `rect` across the horizontal line at row `axis_row`.
    pub const fn horizontal(rect: Rect, axis_row: u32) -> Self {
        Self {
            rect,
            axis: MirrorAxis::Horizontal,
            position: axis_row,
        }
    }

    /// Apply the mirror to `grid`, returning the number of cells written.
    ///
    /// # Errors
    ///
    /// See [`mirror_region_vertical`] and [`mirror_region_horizontal`].
    pub fn apply<G: PixelAccess>(&self, grid: &mut G) -> TransformResult<usize> {
        match self.axis {
            MirrorAxis::Vertical => mirror_region_vertical(grid, self.rect, self.position),
            MirrorAxis::Horizontal => mirror_region_horizontal(grid, self.rect, self.position),
        }
    }
}

/// Validate that the rect lies inside the grid.
fn check_rect<G: PixelAccess>(grid: &G, rect: Rect) -> TransformResult<()> {
    if rect.is_empty() {
        return Ok(());
    }
    grid.check(rect.row as i64, rect.col as i64)?;
    grid.check(rect.bottom() as i64 - 1, rect.right() as i64 - 1)?;
    Ok(())
}

/// Reflect the cells of `rect` across the vertical line at `axis_col`.
///
/// For every row `r` and column `c` of the rectangle, `(r, c)` is copied
/// to `(r, 2 * axis_col - c)`. Returns the number of cells written.
///
/// # Errors
///
/// Returns [`TransformError::Core`](crate::TransformError::Core) wrapping
/// `OutOfRange` if the rectangle or any reflected column lies outside the
/// grid. Nothing is written in that case.
pub fn mirror_region_vertical<G: PixelAccess>(
    grid: &mut G,
    rect: Rect,
    axis_col: u32,
) -> TransformResult<usize> {
    check_rect(grid, rect)?;
    if rect.is_empty() {
        return Ok(0);
    }

    // Reflection reverses order, so the leftmost source gives the
    // rightmost destination and vice versa.
    let axis = 2 * axis_col as i64;
    grid.check(rect.row as i64, axis - rect.col as i64)?;
    grid.check(rect.row as i64, axis - (rect.right() as i64 - 1))?;

    let axis = axis as u32;
    for row in rect.row..rect.bottom() {
        for col in rect.col..rect.right() {
            grid.copy_color((row, col), (row, axis - col));
        }
    }

    let written = rect.area() as usize;
    log::debug!(
        "mirror_region_vertical: {} cells of {:?} across column {}",
        written,
        rect,
        axis_col
    );
    Ok(written)
}

/// Reflect the cells of `rect` across the horizontal line at `axis_row`.
///
/// For every row `r` and column `c` of the rectangle, `(r, c)` is copied
/// to `(2 * axis_row - r, c)`. Returns the number of cells written.
///
/// # Errors
///
/// Returns [`TransformError::Core`](crate::TransformError::Core) wrapping
/// `OutOfRange` if the rectangle or any reflected row lies outside the
/// grid. Nothing is written in that case.
pub fn mirror_region_horizontal<G: PixelAccess>(
    grid: &mut G,
    rect: Rect,
    axis_row: u32,
) -> TransformResult<usize> {
    check_rect(grid, rect)?;
    if rect.is_empty() {
        return Ok(0);
    }

    let axis = 2 * axis_row as i64;
    grid.check(axis - rect.row as i64, rect.col as i64)?;
    grid.check(axis - (rect.bottom() as i64 - 1), rect.col as i64)?;

    let axis = axis as u32;
    for row in rect.row..rect.bottom() {
        for col in rect.col..rect.right() {
            grid.copy_color((row, col), (axis - row, col));
        }
    }

    let written = rect.area() as usize;
    log::debug!(
        "mirror_region_horizontal: {} cells of {:?} across row {}",
        written,
        rect,
        axis_row
    );
    Ok(written)
}
