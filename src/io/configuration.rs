//! Placement constants and runtime configuration defaults

use crate::world::sink::Material;

// Default values for configurable parameters
/// Cell scale applied when the builder is not told otherwise
pub const DEFAULT_MAGNIFIER: i32 = 1;

/// Quiet-zone width, in cells, applied when the builder is not told otherwise
pub const DEFAULT_BORDER_SIZE: i32 = 1;

/// Material for foreground (dark) cells, black wool
pub const DEFAULT_FOREGROUND: Material = Material::new(35, 15);

/// Material for background (light) cells, white wool
pub const DEFAULT_BACKGROUND: Material = Material::new(35, 0);

// Safety limit to prevent excessive memory allocation
/// Maximum side length of an effective (magnified and bordered) matrix
pub const MAX_MATRIX_DIMENSION: usize = 4096;

// World layout
/// Notification regions are 16x16 voxel columns
pub const REGION_SHIFT: i32 = 4;

/// Lowest buildable y coordinate of a world that does not report one
pub const DEFAULT_MIN_HEIGHT: i32 = 0;

/// Highest buildable y coordinate of a world that does not report one
pub const DEFAULT_MAX_HEIGHT: i32 = 255;

// Image input settings
/// Pixels with luma strictly below this value are foreground modules
pub const DARK_LUMA_THRESHOLD: u8 = 128;

/// Pixels per module when reading a matrix image
pub const DEFAULT_MODULE_PIXELS: u32 = 1;

// Output settings
/// Suffix added to exported voxel list filenames
pub const OUTPUT_SUFFIX: &str = "_voxels";

/// Extension of exported voxel lists
pub const OUTPUT_EXTENSION: &str = "csv";
