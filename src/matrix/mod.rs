//! QR matrix representation and grid-to-grid transforms

/// Rotation state and quarter-turn primitives
pub mod rotation;
/// Square boolean matrix with magnify, border, rotate and mirror
pub mod transform;

pub use rotation::Rotation;
pub use transform::MatrixTransform;
