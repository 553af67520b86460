pub mod logger;

pub mod batch;
pub mod cancel;
pub mod cleaner;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod controller;
pub mod discovery;
pub mod error;
pub mod processing;
pub mod report;
pub mod signal;
pub mod utils;

pub use batch::{BatchResizer, Parallelism};
pub use cancel::CancellationToken;
pub use cleaner::clean_directory;
pub use codec::{ImageCodec, ImageCrateCodec};
pub use config::RunConfig;
pub use controller::{RunController, RunOutcome, RunResult, RunState, RunSummary};
pub use discovery::{find_images, is_image_file};
pub use error::{ResizeError, Result};
pub use processing::{output_path, scaled_dimensions, validate_scale, ImageTask};
pub use signal::spawn_interrupt_listener;
pub use utils::{calculate_speedup, format_speedup};
