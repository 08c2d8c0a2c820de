//! Region copy between grids
//!
//! Copies never fail on size mismatches: the copied block is clipped to
//! the source rectangle, the source bounds and the destination bounds,
//! and whatever falls outside is silently dropped.

use picturelab_core::{PixelAccess, Rect};

/// Copy all of `source` into `dest` with its top-left at
/// `(to_row, to_col)`.
///
/// Returns the number of cells written.
pub fn copy<D, S>(dest: &mut D, source: &S, to_row: u32, to_col: u32) -> usize
where
    D: PixelAccess,
    S: PixelAccess,
{
    let whole = Rect::covering(source.height(), source.width());
    copy_region(dest, source, whole, to_row, to_col)
}

/// Copy the `from` rectangle of `source` into `dest` with its top-left at
/// `(to_row, to_col)`.
///
/// Source cell `(from.row + i, from.col + j)` lands on
/// `(to_row + i, to_col + j)`. Cells are written row by row, left to
/// right. Returns the number of cells written.
pub fn copy_region<D, S>(dest: &mut D, source: &S, from: Rect, to_row: u32, to_col: u32) -> usize
where
    D: PixelAccess,
    S: PixelAccess,
{
    let Some(from) = from.intersect(&Rect::covering(source.height(), source.width())) else {
        return 0;
    };
    if to_row >= dest.height() || to_col >= dest.width() {
        return 0;
    }

    let rows = from.height.min(dest.height() - to_row);
    let cols = from.width.min(dest.width() - to_col);
    for i in 0..rows {
        for j in 0..cols {
            let rgb = source.get_color(from.row + i, from.col + j);
            dest.set_color(to_row + i, to_col + j, rgb);
        }
    }

    let written = rows as usize * cols as usize;
    log::trace!(
        "copy_region: {} cells from {:?} to ({}, {})",
        written,
        from,
        to_row,
        to_col
    );
    written
}
