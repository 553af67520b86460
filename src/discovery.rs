use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{ResizeError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every image below `source_dir`, recursing into all
/// subdirectories.
///
/// # Returns
/// * `Ok(paths)` - Matching files sorted by path (empty if none match)
/// * `Err(ResizeError::NotFound)` - If `source_dir` does not exist
/// * `Err(ResizeError::NotADirectory)` - If `source_dir` is a file
pub fn find_images(source_dir: &Path) -> Result<Vec<PathBuf>> {
    if !source_dir.exists() {
        return Err(ResizeError::NotFound(source_dir.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(ResizeError::NotADirectory(source_dir.to_path_buf()));
    }

    let mut image_files = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    // Sort by path for deterministic ordering
    image_files.sort();
    Ok(image_files)
}

/// Checks the extension against the recognized set, ignoring case.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}
