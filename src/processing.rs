use crate::codec::ImageCodec;
use crate::constants::{MAX_OUTPUT_DIMENSION, OUTPUT_EXTENSION};
use crate::error::{ResizeError, Result};
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// Validates a scale factor before any file is touched.
///
/// # Returns
/// * `Ok(scale)` if the factor is finite and strictly positive
/// * `Err(ResizeError::InvalidScale)` otherwise
pub fn validate_scale(scale: f64) -> Result<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ResizeError::InvalidScale(scale))
    }
}

/// Computes the output size as `round(width * scale) x round(height * scale)`.
///
/// # Returns
/// * `Ok((width, height))` - The scaled dimensions
/// * `Err(ResizeError::InvalidDimensions)` - If a side rounds to zero or
///   exceeds what a JPEG can hold
///
/// # Example
/// ```
/// use img_rescale::scaled_dimensions;
///
/// assert_eq!(scaled_dimensions(640, 480, 2.0).unwrap(), (1280, 960));
/// assert_eq!(scaled_dimensions(3, 3, 0.5).unwrap(), (2, 2));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Result<(u32, u32)> {
    let scale = validate_scale(scale)?;
    let scale_side = |side: u32| -> u64 { (f64::from(side) * scale).round() as u64 };

    let new_width = scale_side(width);
    let new_height = scale_side(height);
    let limit = u64::from(MAX_OUTPUT_DIMENSION);

    if new_width == 0 || new_height == 0 || new_width > limit || new_height > limit {
        return Err(ResizeError::InvalidDimensions(
            new_width.min(u64::from(u32::MAX)) as u32,
            new_height.min(u64::from(u32::MAX)) as u32,
            MAX_OUTPUT_DIMENSION,
        ));
    }

    Ok((new_width as u32, new_height as u32))
}

/// Builds `<output_dir>/<source stem>.jpg`; the source extension is dropped
/// whatever it was.
pub fn output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_stem = input_path
        .file_stem()
        .ok_or_else(|| ResizeError::InvalidFileName(input_path.to_path_buf()))?;

    let output_filename = format!("{}.{}", file_stem.to_string_lossy(), OUTPUT_EXTENSION);
    Ok(output_dir.join(output_filename))
}

/// One file's worth of work. Built by the batch resizer during fan-out and
/// consumed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTask {
    source_path: PathBuf,
    dest_path: PathBuf,
    scale: f64,
}

impl ImageTask {
    pub fn new(source_path: &Path, output_dir: &Path, scale: f64) -> Result<Self> {
        Ok(Self {
            source_path: source_path.to_path_buf(),
            dest_path: output_path(source_path, output_dir)?,
            scale: validate_scale(scale)?,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn dest_path(&self) -> &Path {
        &self.dest_path
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Runs the work unit: decode -> resize -> encode -> write.
    ///
    /// Returns the dimensions of the written image. The destination file is
    /// truncated if it already exists.
    pub fn execute<C: ImageCodec + ?Sized>(&self, codec: &C, quality: u8) -> Result<(u32, u32)> {
        let img = codec.decode(&self.source_path)?;
        let (width, height) = img.dimensions();
        let (new_width, new_height) = scaled_dimensions(width, height, self.scale)?;

        let resized = codec.resize(&img, new_width, new_height);
        let encoded = codec.encode_jpeg(&resized, quality)?;

        fs::write(&self.dest_path, encoded).map_err(|source| ResizeError::WriteFailed {
            path: self.dest_path.clone(),
            source,
        })?;

        Ok((new_width, new_height))
    }
}
