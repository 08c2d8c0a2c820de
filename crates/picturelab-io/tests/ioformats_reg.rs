//! Image format regression test
//!
//! Reads the quadrant test image and writes it back through every
//! enabled format.

use picturelab_core::PixelAccess;
use picturelab_io::{ImageFormat, detect_format, read_image, read_image_mem, write_image_mem};
use picturelab_test::{RegParams, load_test_image, test_data_path};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let path = test_data_path("quadrants.ppm");
    let format = detect_format(&path).expect("detect format");
    rp.compare_values(1.0, if format == ImageFormat::Pnm { 1.0 } else { 0.0 }, 0.0);

    let grid = load_test_image("quadrants.ppm").expect("load quadrants.ppm");
    rp.compare_values(4.0, grid.height() as f64, 0.0);
    rp.compare_values(6.0, grid.width() as f64, 0.0);
    rp.compare_values(1.0, if grid.get_color(0, 0) == (255, 0, 0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if grid.get_color(0, 5) == (0, 255, 0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if grid.get_color(3, 0) == (0, 0, 255) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(
        1.0,
        if grid.get_color(3, 5) == (255, 255, 255) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Lossless formats reproduce the grid exactly ---
    for format in [ImageFormat::Pnm, ImageFormat::Png] {
        let bytes = write_image_mem(&grid, format).expect("encode");
        let back = read_image_mem(&bytes).expect("decode");
        rp.compare_grids(&grid, &back);
    }

    // --- JPEG keeps the dimensions ---
    let bytes = write_image_mem(&grid, ImageFormat::Jpeg).expect("encode jpeg");
    let back = read_image_mem(&bytes).expect("decode jpeg");
    rp.compare_values(4.0, back.height() as f64, 0.0);
    rp.compare_values(6.0, back.width() as f64, 0.0);

    // --- Unknown format is refused ---
    rp.compare_values(
        1.0,
        if write_image_mem(&grid, ImageFormat::Unknown).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Missing file surfaces an I/O error ---
    let missing = read_image(test_data_path("does-not-exist.ppm"));
    rp.compare_values(1.0, if missing.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "ioformats regression test failed");
}
