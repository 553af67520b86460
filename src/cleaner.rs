use crate::error::{ResizeError, Result};
use std::fs;
use std::path::Path;

/// Guarantees that `dest_dir` exists and holds no entries.
///
/// A missing directory is created along with its parents. An existing one is
/// emptied recursively but kept. Calling this twice in a row is harmless.
///
/// # Returns
/// * `Ok(())` - The directory exists and is empty
/// * `Err(ResizeError::NotADirectory)` - If `dest_dir` is a file
/// * `Err(ResizeError::Cleanup)` - If creating or deleting is denied
pub fn clean_directory(dest_dir: &Path) -> Result<()> {
    let cleanup_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ResizeError::Cleanup { path, source }
    };

    if !dest_dir.exists() {
        return fs::create_dir_all(dest_dir).map_err(cleanup_error(dest_dir));
    }
    if !dest_dir.is_dir() {
        return Err(ResizeError::NotADirectory(dest_dir.to_path_buf()));
    }

    for entry in fs::read_dir(dest_dir).map_err(cleanup_error(dest_dir))? {
        let entry = entry.map_err(cleanup_error(dest_dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(cleanup_error(&path))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(cleanup_error(&path))?;
        } else {
            fs::remove_file(&path).map_err(cleanup_error(&path))?;
        }
    }

    Ok(())
}
