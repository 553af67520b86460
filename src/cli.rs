use crate::constants::{
    DEFAULT_CONCURRENT_DIR, DEFAULT_SCALE, DEFAULT_SEQUENTIAL_DIR, DEFAULT_SOURCE_DIR,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-rescale",
    about = "Rescale a directory of images sequentially and concurrently, then compare",
    long_about = "img-rescale converts every PNG/JPEG below the source directory into a scaled JPEG \
                  (quality 100), once one file at a time and once fanned out over a worker pool. \
                  It reports both timings and the speedup. Ctrl+C during the concurrent run stops \
                  new work and empties both output directories.",
    version,
    after_help = "EXAMPLES:\n  \
    img-rescale\n  \
    img-rescale --scale 0.5 -j 4\n  \
    img-rescale --source ./photos --per-file -v"
)]
pub struct Args {
    #[arg(
        short = 's',
        long,
        default_value = DEFAULT_SOURCE_DIR,
        help = "Source directory scanned recursively for images"
    )]
    pub source: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_SEQUENTIAL_DIR,
        help = "Output directory of the sequential run"
    )]
    pub sequential_output: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_CONCURRENT_DIR,
        help = "Output directory of the concurrent run"
    )]
    pub concurrent_output: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_SCALE,
        help = "Scale factor applied to both sides (default: 2.0)",
        long_help = "Scale factor applied to width and height. Output sides are \
                     round(side * scale). Must be greater than 0."
    )]
    pub scale: f64,

    #[arg(
        short = 'j',
        long,
        conflicts_with = "per_file",
        help = "Number of concurrent workers (default: CPU count)"
    )]
    pub workers: Option<usize>,

    #[arg(
        long,
        help = "Run one worker per file instead of a bounded pool",
        long_help = "Size the concurrent pool to the number of files. \
                     Large batches will create as many threads as there are images."
    )]
    pub per_file: bool,

    #[arg(
        long,
        help = "Also empty the concurrent output when the concurrent run fails"
    )]
    pub clean_on_failure: bool,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print every file as it is processed")]
    pub verbose: bool,
}
