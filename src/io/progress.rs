//! Batch progress display for the command-line tool

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of matrix images
pub struct ProgressManager {
    bar: ProgressBar,
    voxels: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress bar; [`Self::initialize`] sizes and shows it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            voxels: 0,
        }
    }

    /// Size the bar for a batch
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
        self.voxels = 0;
    }

    /// Show the file being processed
    pub fn start_file(&self, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(name.to_string());
    }

    /// Count a finished file and the voxels it produced
    pub fn complete_file(&mut self, voxels: usize) {
        self.voxels += voxels;
        self.bar.inc(1);
    }

    /// Total voxels produced so far
    pub const fn voxels(&self) -> usize {
        self.voxels
    }

    /// Files completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} voxels placed", self.voxels));
    }
}
