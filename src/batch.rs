use crate::cancel::CancellationToken;
use crate::codec::ImageCodec;
use crate::constants::{JPEG_QUALITY, PROGRESS_BAR_TEMPLATE};
use crate::discovery::find_images;
use crate::error::{ResizeError, Result};
use crate::logger;
use crate::processing::{validate_scale, ImageTask};
use crate::{error, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// How many workers the concurrent mode may run at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    /// Fixed-size pool draining the task list.
    Bounded(usize),
    /// One worker per discovered file.
    PerFile,
}

impl Default for Parallelism {
    fn default() -> Self {
        Parallelism::Bounded(num_cpus::get())
    }
}

impl Parallelism {
    /// Pool size for a batch of `file_count` files, never below one.
    pub fn worker_count(&self, file_count: usize) -> usize {
        let file_count = file_count.max(1);
        match *self {
            Parallelism::Bounded(workers) => workers.clamp(1, file_count),
            Parallelism::PerFile => file_count,
        }
    }
}

/// Runs discovery, the per-file transform and the write, either one file at
/// a time or fanned out over a rayon pool.
#[derive(Debug, Clone)]
pub struct BatchResizer<C> {
    codec: C,
    parallelism: Parallelism,
}

impl<C: ImageCodec> BatchResizer<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            parallelism: Parallelism::default(),
        }
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Processes every image strictly in discovery order on the calling
    /// thread. The first failure aborts the remaining files.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of files written to `dest_dir`
    /// * `Err(ResizeError::NotFound)` - If `source_dir` is missing
    /// * `Err(ResizeError::Task)` - The failing file and its underlying cause
    pub fn resize_sequential(&self, source_dir: &Path, dest_dir: &Path, scale: f64) -> Result<usize> {
        let scale = validate_scale(scale)?;
        let tasks = plan_tasks(source_dir, dest_dir, scale)?;
        if tasks.is_empty() {
            warn!("No image files found in {:?}", source_dir);
            return Ok(0);
        }

        let progress = create_progress_bar(tasks.len(), "sequential");
        for task in &tasks {
            verbose!("Resizing {:?} -> {:?}", task.source_path(), task.dest_path());
            if let Err(e) = task.execute(&self.codec, JPEG_QUALITY) {
                progress.abandon();
                return Err(e.for_file(task.source_path()));
            }
            progress.inc(1);
        }
        progress.finish();

        Ok(tasks.len())
    }

    /// Launches one work unit per file on a pool sized by [`Parallelism`]
    /// and waits for all of them.
    ///
    /// Each unit checks `token` before touching the filesystem and bails out
    /// with [`ResizeError::Cancelled`] once it is set. Units that already
    /// started run to completion. A failing unit does not stop its siblings.
    ///
    /// # Returns
    /// * `Ok(count)` - Every file was written
    /// * `Err(ResizeError::Cancelled)` - At least one unit saw the cancellation
    /// * `Err(ResizeError::Task)` - First failure in discovery order otherwise
    pub fn resize_concurrent(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        scale: f64,
        token: &CancellationToken,
    ) -> Result<usize> {
        let scale = validate_scale(scale)?;
        let tasks = plan_tasks(source_dir, dest_dir, scale)?;
        if tasks.is_empty() {
            warn!("No image files found in {:?}", source_dir);
            return Ok(0);
        }

        let workers = self.parallelism.worker_count(tasks.len());
        verbose!("Fanning out {} files over {} workers", tasks.len(), workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("resize-worker-{}", index))
            .build()
            .map_err(|e| ResizeError::ThreadPool(e.to_string()))?;

        let progress = create_progress_bar(tasks.len(), "concurrent");
        let results: Vec<Result<()>> = pool.install(|| {
            tasks
                .par_iter()
                .map(|task| {
                    let outcome = run_unit(task, &self.codec, token);
                    progress.inc(1);
                    outcome
                })
                .collect()
        });

        let outcome = collect_outcomes(results);
        match &outcome {
            Ok(_) => progress.finish(),
            Err(_) => progress.abandon(),
        }
        outcome
    }
}

fn plan_tasks(source_dir: &Path, dest_dir: &Path, scale: f64) -> Result<Vec<ImageTask>> {
    let image_files = find_images(source_dir)?;
    prepare_output_dir(dest_dir)?;

    image_files
        .iter()
        .map(|path| ImageTask::new(path, dest_dir, scale).map_err(|e| e.for_file(path)))
        .collect()
}

fn prepare_output_dir(dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir).map_err(|source| ResizeError::DirectoryCreationFailed {
        path: dest_dir.to_path_buf(),
        source,
    })
}

fn run_unit<C: ImageCodec + ?Sized>(
    task: &ImageTask,
    codec: &C,
    token: &CancellationToken,
) -> Result<()> {
    // Checked once, before any file I/O
    token.check()?;

    verbose!("Resizing {:?} -> {:?}", task.source_path(), task.dest_path());
    task.execute(codec, JPEG_QUALITY)
        .map(|_| ())
        .map_err(|e| e.for_file(task.source_path()))
}

/// Folds per-unit results into the batch outcome. Cancellation wins over
/// ordinary failures.
fn collect_outcomes(results: Vec<Result<()>>) -> Result<usize> {
    let total = results.len();
    let mut processed = 0;
    let mut cancelled = 0;
    let mut failures: Vec<ResizeError> = Vec::new();

    for result in results {
        match result {
            Ok(()) => processed += 1,
            Err(e) if e.is_cancelled() => cancelled += 1,
            Err(e) => {
                error!("{}", e.describe());
                failures.push(e);
            }
        }
    }

    if cancelled > 0 {
        warn!(
            "Cancelled: {} of {} files were not started ({} written)",
            cancelled, total, processed
        );
        return Err(ResizeError::Cancelled);
    }

    if !failures.is_empty() {
        warn!("Failed files: {} of {}", failures.len(), total);
        return Err(failures.remove(0));
    }

    Ok(processed)
}

fn create_progress_bar(len: usize, prefix: &'static str) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template(PROGRESS_BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    let progress = ProgressBar::new(len as u64);
    progress.set_style(style);
    progress.set_prefix(prefix);
    progress
}
