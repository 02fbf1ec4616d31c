//! Command-line interface for batch placement of QR code images

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_SIZE, DEFAULT_FOREGROUND, DEFAULT_MAGNIFIER,
    DEFAULT_MODULE_PIXELS, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{PlacementError, Result, invalid_argument};
use crate::io::export::export_area_csv;
use crate::io::image::load_matrix_png;
use crate::io::progress::ProgressManager;
use crate::matrix::Rotation;
use crate::placement::{Orientation, PlacementSessions, QrPlacement};
use crate::world::{Material, MemoryWorld};
use clap::Parser;
use glam::IVec3;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "qrvoxel")]
#[command(
    author,
    version,
    about = "Lay QR code images out as voxels and export the placed blocks"
)]
/// Command-line arguments for the placement tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Anchor coordinate as x,y,z
    #[arg(
        short = 'a',
        long = "at",
        default_value = "0,64,0",
        value_parser = parse_anchor,
        allow_hyphen_values = true
    )]
    pub anchor: IVec3,

    /// Orientation, e.g. east_south or north_up
    #[arg(short, long, default_value = "east_south", value_parser = parse_orientation)]
    pub orientation: Orientation,

    /// Voxels per module along each axis
    #[arg(short, long, default_value_t = DEFAULT_MAGNIFIER, allow_negative_numbers = true)]
    pub magnifier: i32,

    /// Quiet-zone width in modules
    #[arg(short, long, default_value_t = DEFAULT_BORDER_SIZE, allow_negative_numbers = true)]
    pub border: i32,

    /// Clockwise rotation in degrees (multiple of 90)
    #[arg(short, long, default_value = "0", value_parser = parse_rotation)]
    pub rotation: Rotation,

    /// Mirror the code vertically
    #[arg(short, long)]
    pub turned: bool,

    /// Foreground material as id or id:data
    #[arg(long, default_value_t = DEFAULT_FOREGROUND, value_parser = parse_material)]
    pub foreground: Material,

    /// Background material as id or id:data
    #[arg(long, default_value_t = DEFAULT_BACKGROUND, value_parser = parse_material)]
    pub background: Material,

    /// Image pixels per module
    #[arg(short = 'p', long, default_value_t = DEFAULT_MODULE_PIXELS)]
    pub module_pixels: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

fn parse_anchor(value: &str) -> std::result::Result<IVec3, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid_argument("anchor", &value, &e).to_string())?;
    match parts.as_slice() {
        &[x, y, z] => Ok(IVec3::new(x, y, z)),
        _ => Err(invalid_argument("anchor", &value, &"expected x,y,z").to_string()),
    }
}

fn parse_orientation(value: &str) -> std::result::Result<Orientation, String> {
    value.parse().map_err(|e: PlacementError| e.to_string())
}

fn parse_rotation(value: &str) -> std::result::Result<Rotation, String> {
    value.parse().map_err(|e: PlacementError| e.to_string())
}

fn parse_material(value: &str) -> std::result::Result<Material, String> {
    value.parse().map_err(|e: PlacementError| e.to_string())
}

/// Places every input image into its own in-memory world and exports the result
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, placement or
    /// export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_argument(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| PlacementError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_png(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let matrix = load_matrix_png(input_path, self.cli.module_pixels)?;
        let placement = QrPlacement::builder()
            .at(MemoryWorld::new(), self.cli.anchor)
            .orientation(self.cli.orientation)
            .foreground(self.cli.foreground)
            .background(self.cli.background)
            .turned(self.cli.turned)
            .magnifier(self.cli.magnifier)
            .border_size(self.cli.border)
            .content(matrix)
            .build()?;

        let mut sessions = PlacementSessions::new();
        sessions.begin(input_path, placement)?;
        sessions
            .require(&input_path)?
            .set_rotation(self.cli.rotation)?;
        let placement = sessions.commit(&input_path)?;

        let output_path = Self::get_output_path(input_path);
        export_area_csv(
            placement.area(),
            placement.foreground(),
            placement.background(),
            &output_path,
        )?;
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            voxels = placement.area().len(),
            "exported placement"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(placement.area().len());
        }

        Ok(())
    }

    /// Path of the voxel list written for an input image
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
