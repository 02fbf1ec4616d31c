//! CLI entry point for laying QR code images out as voxels

use clap::Parser;
use qrvoxel::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> qrvoxel::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
