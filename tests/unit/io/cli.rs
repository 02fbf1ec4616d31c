//! Tests for command-line parsing and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use glam::IVec3;
    use image::{GrayImage, Luma};
    use qrvoxel::io::cli::{Cli, FileProcessor};
    use qrvoxel::io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_BORDER_SIZE, DEFAULT_FOREGROUND, DEFAULT_MAGNIFIER,
    };
    use qrvoxel::matrix::Rotation;
    use qrvoxel::placement::Orientation;
    use qrvoxel::world::Material;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_dot_png(path: &Path) {
        let img = GrayImage::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 {
                Luma([0])
            } else {
                Luma([255])
            }
        });
        img.save(path).unwrap();
    }

    fn quiet_cli(target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["qrvoxel", target.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["qrvoxel", "code.png"]);

        assert_eq!(cli.target, PathBuf::from("code.png"));
        assert_eq!(cli.anchor, IVec3::new(0, 64, 0));
        assert_eq!(cli.orientation, Orientation::EastSouth);
        assert_eq!(cli.magnifier, DEFAULT_MAGNIFIER);
        assert_eq!(cli.border, DEFAULT_BORDER_SIZE);
        assert_eq!(cli.rotation, Rotation::Deg0);
        assert_eq!(cli.foreground, DEFAULT_FOREGROUND);
        assert_eq!(cli.background, DEFAULT_BACKGROUND);
        assert!(!cli.turned);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every option set
    // Verified by swapping the anchor component order
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "qrvoxel",
            "codes",
            "--at",
            "-5,70,12",
            "--orientation",
            "north-up",
            "--magnifier",
            "3",
            "--border",
            "0",
            "--rotation",
            "270",
            "--turned",
            "--foreground",
            "1",
            "--background",
            "35:4",
            "--module-pixels",
            "8",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.anchor, IVec3::new(-5, 70, 12));
        assert_eq!(cli.orientation, Orientation::NorthUp);
        assert_eq!(cli.magnifier, 3);
        assert_eq!(cli.border, 0);
        assert_eq!(cli.rotation, Rotation::Deg270);
        assert!(cli.turned);
        assert_eq!(cli.foreground, Material::new(1, 0));
        assert_eq!(cli.background, Material::new(35, 4));
        assert_eq!(cli.module_pixels, 8);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests malformed values are rejected by the value parsers
    // Verified by accepting anchors with two components
    #[test]
    fn test_cli_rejects_malformed_values() {
        for args in [
            ["qrvoxel", "code.png", "--at", "1,2"],
            ["qrvoxel", "code.png", "--at", "a,b,c"],
            ["qrvoxel", "code.png", "-o", "sideways"],
            ["qrvoxel", "code.png", "-r", "45"],
            ["qrvoxel", "code.png", "--foreground", "35:16"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }

    // Tests output paths sit next to their input with the voxel suffix
    // Verified by dropping the parent directory
    #[test]
    fn test_output_path_generation() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("codes/door.png")),
            PathBuf::from("codes/door_voxels.csv")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("door.PNG")),
            PathBuf::from("door_voxels.csv")
        );
    }

    // Tests a single image is placed and exported
    // Verified by exporting before applying the border
    #[test]
    fn test_process_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("dot.png");
        write_dot_png(&input);

        let mut processor = FileProcessor::new(quiet_cli(&input, &[]));
        processor.process().unwrap();

        let csv = fs::read_to_string(temp_dir.path().join("dot_voxels.csv")).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "x,y,z,material");
        assert!(lines.contains(&"2,64,2,35:15"));
        assert!(lines.contains(&"0,64,0,35:0"));
    }

    // Tests directories are scanned for PNG files only
    // Verified by matching the extension case-sensitively
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_dot_png(&temp_dir.path().join("a.png"));
        write_dot_png(&temp_dir.path().join("b.PNG"));
        fs::write(temp_dir.path().join("notes.txt"), "not a code").unwrap();

        let mut processor = FileProcessor::new(quiet_cli(temp_dir.path(), &["-b", "0"]));
        processor.process().unwrap();

        assert!(temp_dir.path().join("a_voxels.csv").exists());
        assert!(temp_dir.path().join("b_voxels.csv").exists());
        assert!(!temp_dir.path().join("notes_voxels.csv").exists());
    }

    // Tests existing outputs are left alone unless --no-skip is given
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("dot.png");
        let output = temp_dir.path().join("dot_voxels.csv");
        write_dot_png(&input);
        fs::write(&output, "existing").unwrap();

        FileProcessor::new(quiet_cli(&input, &[]))
            .process()
            .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        FileProcessor::new(quiet_cli(&input, &["--no-skip"]))
            .process()
            .unwrap();
        assert!(fs::read_to_string(&output).unwrap().starts_with("x,y,z"));
    }

    // Tests invalid targets and parameters surface as errors
    // Verified by removing file type validation
    #[test]
    fn test_process_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.png");
        assert!(FileProcessor::new(quiet_cli(&missing, &[])).process().is_err());

        let text = temp_dir.path().join("code.txt");
        fs::write(&text, "not a png").unwrap();
        assert!(FileProcessor::new(quiet_cli(&text, &[])).process().is_err());

        let input = temp_dir.path().join("dot.png");
        write_dot_png(&input);
        let negative = quiet_cli(&input, &["-m", "-1"]);
        assert_eq!(negative.magnifier, -1);
        assert!(FileProcessor::new(negative).process().is_err());
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut processor = FileProcessor::new(quiet_cli(temp_dir.path(), &[]));
        assert!(processor.process().is_ok());
    }
}
