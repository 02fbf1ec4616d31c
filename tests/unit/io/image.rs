//! Tests for reading QR matrices from grayscale images

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use qrvoxel::PlacementError;
    use qrvoxel::io::image::{load_matrix_png, matrix_from_luma};
    use tempfile::TempDir;

    // Two-module image with the top-left and bottom-right modules dark
    fn diagonal(module_pixels: u32) -> GrayImage {
        GrayImage::from_fn(2 * module_pixels, 2 * module_pixels, |x, y| {
            if (x / module_pixels) == (y / module_pixels) {
                Luma([10])
            } else {
                Luma([240])
            }
        })
    }

    // Tests modules are sampled per block and dark means foreground
    // Verified by inverting the luma comparison
    #[test]
    fn test_matrix_from_luma_modules() {
        let matrix = matrix_from_luma(&diagonal(4), 4).unwrap();

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get(0, 0), Some(true));
        assert_eq!(matrix.get(1, 0), Some(false));
        assert_eq!(matrix.get(0, 1), Some(false));
        assert_eq!(matrix.get(1, 1), Some(true));
    }

    // Tests the threshold is strict
    // Verified by using less-or-equal
    #[test]
    fn test_threshold_boundary() {
        let img = GrayImage::from_fn(2, 2, |x, _| if x == 0 { Luma([127]) } else { Luma([128]) });
        let matrix = matrix_from_luma(&img, 1).unwrap();

        assert_eq!(matrix.get(0, 0), Some(true));
        assert_eq!(matrix.get(1, 0), Some(false));
    }

    // Tests unusable images are rejected
    // Verified by removing the squareness check
    #[test]
    fn test_matrix_from_luma_rejects_bad_shapes() {
        let wide = GrayImage::new(4, 2);
        assert!(matches!(
            matrix_from_luma(&wide, 1),
            Err(PlacementError::InvalidMatrix { .. })
        ));
        assert!(matches!(
            matrix_from_luma(&diagonal(3), 4),
            Err(PlacementError::InvalidMatrix { .. })
        ));
        assert!(matches!(
            matrix_from_luma(&diagonal(1), 0),
            Err(PlacementError::InvalidArgument { .. })
        ));
        assert!(matrix_from_luma(&GrayImage::new(0, 0), 1).is_err());
    }

    // Tests PNG files on disk load through the same sampling
    // Verified by skipping the luma conversion
    #[test]
    fn test_load_matrix_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diagonal.png");
        diagonal(2).save(&path).unwrap();

        let matrix = load_matrix_png(&path, 2).unwrap();
        assert_eq!(matrix.get(1, 1), Some(true));
        assert_eq!(matrix.get(0, 1), Some(false));

        let missing = load_matrix_png(&temp_dir.path().join("missing.png"), 1);
        assert!(matches!(missing, Err(PlacementError::ImageLoad { .. })));
    }
}
