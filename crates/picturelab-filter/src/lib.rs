//! picturelab-filter - Edge detection
//!
//! This crate provides two edge detectors that turn a color grid into a
//! black (edge) and white (non-edge) drawing:
//!
//! - [`edge_detection`]: single pass, right and bottom neighbor threshold
//! - [`edge_detection_paired`]: two passes, compares opposite neighbor pairs

pub mod edge;
mod error;

pub use edge::{EdgeMask, edge_detection, edge_detection_paired, edge_mask, edge_pair};
pub use error::{FilterError, FilterResult};
