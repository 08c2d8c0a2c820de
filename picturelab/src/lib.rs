//! Picturelab - Pixel-grid transformations for Rust
//!
//! # Overview
//!
//! Picturelab operates on an in-memory grid of RGB pixels addressed by
//! (row, col). Every operation mutates the grid in place, except region
//! copies, which read one grid and write another:
//!
//! - Image I/O (PNM, PNG, JPEG)
//! - Color processing (grayscale, negation, channel isolation, autolevel)
//! - Edge detection (neighbor threshold and paired-neighbor variants)
//! - Geometric operations (whole-grid and bounded mirrors, region copy,
//!   collage)
//!
//! # Example
//!
//! ```
//! use picturelab::{Grid, PixelAccess};
//!
//! let mut grid = Grid::filled(4, 6, (0, 128, 255)).unwrap();
//! picturelab::color::negate(&mut grid);
//! picturelab::transform::mirror_vertical(&mut grid);
//! assert_eq!(grid.get_color(3, 5), (255, 127, 0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use picturelab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use picturelab_color as color;
pub use picturelab_filter as filter;
pub use picturelab_io as io;
pub use picturelab_transform as transform;
