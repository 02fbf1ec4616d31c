//! Voxel list export

use crate::io::error::{PlacementError, Result};
use crate::placement::VoxelMap;
use crate::world::sink::Material;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render an area as CSV lines of `x,y,z,material`
///
/// Rows are ordered bottom layer first, then by `z`, then by `x`.
pub fn area_to_csv(area: &VoxelMap, foreground: Material, background: Material) -> String {
    let mut voxels: Vec<_> = area.iter().collect();
    voxels.sort_by_key(|(position, _)| (position.y, position.z, position.x));

    let mut csv = String::from("x,y,z,material\n");
    for (position, &is_foreground) in voxels {
        let material = if is_foreground { foreground } else { background };
        // Writing into a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{material}",
            position.x, position.y, position.z
        );
    }
    csv
}

/// Write an area as CSV, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_area_csv(
    area: &VoxelMap,
    foreground: Material,
    background: Material,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PlacementError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(output_path, area_to_csv(area, foreground, background)).map_err(|e| {
        PlacementError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write voxel list",
            source: e,
        }
    })
}
