//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use qrvoxel::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a fresh manager has counted nothing
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::default();
        assert_eq!(pm.voxels(), 0);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    // Tests completed files and voxels accumulate across a batch
    // Verified by overwriting the voxel total per file
    #[test]
    fn test_progress_accumulates() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_file(Path::new("codes/a.png"));
        pm.complete_file(25);
        pm.start_file(Path::new("codes/b.png"));
        pm.complete_file(100);

        assert_eq!(pm.completed(), 2);
        assert_eq!(pm.voxels(), 125);
        pm.finish();
    }

    // Tests reinitializing starts a new batch
    // Verified by keeping the previous voxel total
    #[test]
    fn test_reinitialize_resets() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.complete_file(9);

        pm.initialize(3);
        assert_eq!(pm.voxels(), 0);
        assert_eq!(pm.completed(), 0);
    }
}
