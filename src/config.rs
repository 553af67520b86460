use crate::batch::Parallelism;
use crate::cli::Args;
use crate::constants::{
    DEFAULT_CONCURRENT_DIR, DEFAULT_SCALE, DEFAULT_SEQUENTIAL_DIR, DEFAULT_SOURCE_DIR,
};
use crate::error::{ResizeError, Result};
use crate::processing::validate_scale;
use std::path::{Path, PathBuf};

/// Everything a run needs, with directories already resolved to absolute
/// paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub sequential_dir: PathBuf,
    pub concurrent_dir: PathBuf,
    pub scale: f64,
    pub parallelism: Parallelism,
    /// Empty the concurrent output when that phase fails with a
    /// non-cancellation error.
    pub clean_on_failure: bool,
}

impl RunConfig {
    /// Default layout: `images`, `output1` and `output2` under `base_dir`.
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            source_dir: base_dir.join(DEFAULT_SOURCE_DIR),
            sequential_dir: base_dir.join(DEFAULT_SEQUENTIAL_DIR),
            concurrent_dir: base_dir.join(DEFAULT_CONCURRENT_DIR),
            scale: DEFAULT_SCALE,
            parallelism: Parallelism::default(),
            clean_on_failure: false,
        }
    }

    /// Builds the configuration from command line arguments. Relative paths
    /// are resolved against `base_dir`.
    pub fn from_args(args: &Args, base_dir: &Path) -> Result<Self> {
        let parallelism = match (args.per_file, args.workers) {
            (true, _) => Parallelism::PerFile,
            (false, Some(0)) => return Err(ResizeError::InvalidWorkerCount(0)),
            (false, Some(workers)) => Parallelism::Bounded(workers),
            (false, None) => Parallelism::default(),
        };

        Ok(Self {
            source_dir: base_dir.join(&args.source),
            sequential_dir: base_dir.join(&args.sequential_output),
            concurrent_dir: base_dir.join(&args.concurrent_output),
            scale: validate_scale(args.scale)?,
            parallelism,
            clean_on_failure: args.clean_on_failure,
        })
    }
}
