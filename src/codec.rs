//! Pixel-level operations behind a trait so the batch pipeline does not
//! depend on a particular imaging library.

use crate::error::Result;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode, resize and encode capability used by every work unit.
///
/// Implementations are shared by all workers of a concurrent run, hence
/// `Send + Sync`.
pub trait ImageCodec: Send + Sync {
    /// Reads and decodes the image stored at `path`.
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    /// Resizes to exactly `width` x `height` with a high-quality filter.
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encodes as baseline JPEG at the given quality (1-100).
    fn encode_jpeg(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>>;
}

/// [`ImageCodec`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        // Sniff the header so a PNG saved as .jpg still decodes
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(img)
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode_jpeg(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        // JPEG has no alpha channel
        let rgb = image.to_rgb8();
        let mut buffer = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder.encode_image(&rgb)?;
        Ok(buffer)
    }
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        (**self).decode(path)
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        (**self).resize(image, width, height)
    }

    fn encode_jpeg(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        (**self).encode_jpeg(image, quality)
    }
}
