pub const DEFAULT_SCALE: f64 = 2.0;
pub const JPEG_QUALITY: u8 = 100;

/// Largest side the baseline JPEG format can store.
pub const MAX_OUTPUT_DIMENSION: u32 = 65_535;

pub const OUTPUT_EXTENSION: &str = "jpg";
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub const DEFAULT_SOURCE_DIR: &str = "images";
pub const DEFAULT_SEQUENTIAL_DIR: &str = "output1";
pub const DEFAULT_CONCURRENT_DIR: &str = "output2";

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} {prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}";

// Common output message prefixes
pub const SEQUENTIAL_PREFIX: &str = "🐢";
pub const CONCURRENT_PREFIX: &str = "⚡";
pub const SPEEDUP_PREFIX: &str = "🎯";
pub const CLEANUP_PREFIX: &str = "🧹";
pub const SUCCESS_PREFIX: &str = "✅";
