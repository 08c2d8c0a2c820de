//! picturelab-transform - Geometric operations on pixel grids
//!
//! This crate provides in-place geometric operations:
//!
//! - Whole-grid mirrors about the vertical, horizontal and main diagonal axes
//! - Mirrors restricted to a rectangle about an arbitrary axis
//! - Rectangle copies between grids, clipped to the grid bounds
//! - Collages built from several (optionally adjusted) source grids

pub mod collage;
pub mod copy;
mod error;
pub mod mirror;
pub mod region;

pub use collage::{Adjustment, Collage, Layer};
pub use copy::{copy, copy_region};
pub use error::{TransformError, TransformResult};
pub use mirror::{
    mirror_diagonal, mirror_horizontal, mirror_horizontal_bottom_to_top, mirror_vertical,
    mirror_vertical_right_to_left,
};
pub use region::{MirrorAxis, RegionMirror, mirror_region_horizontal, mirror_region_vertical};
