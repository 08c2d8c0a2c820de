//! Numbered checks for one regression test

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use picturelab_core::{Grid, PixelAccess};
use picturelab_io::ImageFormat;
use std::fs;

/// What a regression run does besides checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Checks only
    #[default]
    Compare,
    /// Checks, plus a PNM dump of every grid passed to
    /// [`RegParams::write_grid`]
    Display,
}

impl RegTestMode {
    /// Interpret a mode name. Anything other than `display` (in any case)
    /// means [`RegTestMode::Compare`].
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }

    /// Mode named by `REGTEST_MODE`, or the default when unset.
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// State of one `*_reg` test.
///
/// Every `compare_*` call is one numbered check. A failing check is
/// printed and remembered, and the run continues; [`RegParams::cleanup`]
/// reports the outcome.
pub struct RegParams {
    /// Short name, used in messages and output file names
    pub test_name: String,
    /// Mode for this run
    pub mode: RegTestMode,
    /// Number of the last check performed
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test named `test_name`, taking the mode from
    /// the environment.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }
        eprintln!();
        eprintln!("==== {}_reg ({:?}) ====", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of the last check performed (0 before any check).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether grids are being written out.
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        if !ok {
            let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail());
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        ok
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!(
                "expected {}, got {} (off by {}, allowed {})",
                expected, actual, diff, delta
            )
        })
    }

    /// Check that two grids have the same size and the same colors.
    ///
    /// Only the first differing cell is reported.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid) -> bool {
        self.index += 1;
        if !expected.sizes_equal(actual) {
            let (eh, ew) = expected.dimensions();
            let (ah, aw) = actual.dimensions();
            return self.record(false, || {
                format!("grid size {}x{} differs from {}x{}", ah, aw, eh, ew)
            });
        }

        let mismatch = (0..expected.height())
            .flat_map(|row| (0..expected.width()).map(move |col| (row, col)))
            .find(|&(row, col)| expected.get_color(row, col) != actual.get_color(row, col));
        match mismatch {
            None => true,
            Some((row, col)) => {
                let (want, got) = (expected.get_color(row, col), actual.get_color(row, col));
                self.record(false, || {
                    format!("cell ({}, {}) is {:?}, expected {:?}", row, col, got, want)
                })
            }
        }
    }

    /// In display mode, save `grid` as
    /// `tests/regout/<name>.<index>.<label>.pnm`. A no-op otherwise; it is
    /// not a check and does not advance the index.
    pub fn write_grid(&mut self, grid: &Grid, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        let format = ImageFormat::Pnm;
        let path = format!(
            "{}/{}.{:02}.{}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            label,
            format.extension()
        );
        picturelab_io::write_image(grid, &path, format).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("wrote {}", path);
        Ok(())
    }

    /// Print a summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        false
    }

    /// Whether no check has failed so far.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Messages of the failed checks, in order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
