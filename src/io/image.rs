//! Matrix loading from rendered QR code images

use crate::io::configuration::DARK_LUMA_THRESHOLD;
use crate::io::error::{PlacementError, Result, invalid_argument};
use crate::matrix::MatrixTransform;
use image::GrayImage;
use ndarray::Array2;
use std::path::Path;

/// Read a square QR code image into a matrix
///
/// Each `module_pixels x module_pixels` block is one module, sampled at its
/// centre. Dark pixels become foreground cells.
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be opened or decoded
/// - `module_pixels` is zero
/// - The image is not square or its side is not a multiple of `module_pixels`
pub fn load_matrix_png(path: &Path, module_pixels: u32) -> Result<MatrixTransform> {
    let img = image::open(path).map_err(|e| PlacementError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    matrix_from_luma(&img.to_luma8(), module_pixels)
}

/// Convert a grayscale image into a matrix
///
/// # Errors
///
/// Returns `InvalidArgument` for a zero module size and `InvalidMatrix` for
/// a non-square image or one that does not divide into whole modules
pub fn matrix_from_luma(img: &GrayImage, module_pixels: u32) -> Result<MatrixTransform> {
    if module_pixels == 0 {
        return Err(invalid_argument(
            "module pixels",
            &module_pixels,
            &"must be at least 1",
        ));
    }

    let (width, height) = img.dimensions();
    if width != height || width % module_pixels != 0 {
        return Err(PlacementError::InvalidMatrix {
            reason: format!(
                "{width}x{height} image is not a square of {module_pixels}-pixel modules"
            ),
        });
    }

    let modules = (width / module_pixels) as usize;
    let centre = module_pixels / 2;
    let cells = Array2::from_shape_fn((modules, modules), |(row, col)| {
        let x = col as u32 * module_pixels + centre;
        let y = row as u32 * module_pixels + centre;
        img.get_pixel_checked(x, y)
            .is_some_and(|pixel| pixel.0[0] < DARK_LUMA_THRESHOLD)
    });
    MatrixTransform::new(cells)
}
