//! picturelab-test - Regression harness shared by the picturelab crates
//!
//! Each `tests/*_reg.rs` file creates a [`RegParams`], runs a series of
//! numbered checks against it and asserts on [`RegParams::cleanup`] at the
//! end, so one run reports every failing check rather than the first.
//!
//! Setting `REGTEST_MODE=display` additionally writes the grids handed to
//! [`RegParams::write_grid`] under `tests/regout` at the workspace root.
//!
//! ```ignore
//! use picturelab_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("mirror");
//! let grid = load_test_image("quadrants.ppm").expect("load");
//! rp.compare_values(24.0, (grid.height() * grid.width()) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use picturelab_core::Grid;

/// Read `name` from `tests/data/images` at the workspace root.
pub fn load_test_image(name: &str) -> TestResult<Grid> {
    let path = test_data_path(name);
    picturelab_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        message: e.to_string(),
        path,
    })
}

// This crate lives two levels below the workspace root.
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path of a checked-in test image.
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Directory that receives display-mode output.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
