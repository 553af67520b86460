use crate::batch::BatchResizer;
use crate::cancel::CancellationToken;
use crate::cleaner::clean_directory;
use crate::codec::ImageCodec;
use crate::config::RunConfig;
use crate::error::{ResizeError, Result};
use crate::utils::{calculate_speedup, duration_millis};
use crate::{error, info, verbose, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Where a run currently is.
///
/// `Idle -> RunningSequential -> SequentialDone -> RunningConcurrent`, ending
/// in `ConcurrentDone`, `Cancelled` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    RunningSequential,
    SequentialDone,
    RunningConcurrent,
    ConcurrentDone,
    Cancelled,
    Failed,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed { processed: usize },
    Cancelled,
    Failed(ResizeError),
}

/// Timing and outcome of one resize phase.
#[derive(Debug)]
pub struct RunResult {
    pub elapsed: Duration,
    pub outcome: RunOutcome,
}

impl RunResult {
    pub fn elapsed_millis(&self) -> u128 {
        duration_millis(self.elapsed)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.outcome, RunOutcome::Cancelled)
    }

    pub fn processed(&self) -> Option<usize> {
        match self.outcome {
            RunOutcome::Completed { processed } => Some(processed),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResizeError> {
        match &self.outcome {
            RunOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    fn from_result(elapsed: Duration, result: Result<usize>) -> Self {
        let outcome = match result {
            Ok(processed) => RunOutcome::Completed { processed },
            Err(e) if e.is_cancelled() => RunOutcome::Cancelled,
            Err(e) => RunOutcome::Failed(e),
        };
        Self { elapsed, outcome }
    }
}

/// Both phases of a finished run.
#[derive(Debug)]
pub struct RunSummary {
    pub sequential: RunResult,
    pub concurrent: RunResult,
    pub state: RunState,
    /// Directories emptied after the concurrent phase ended early.
    pub cleaned: Vec<PathBuf>,
}

impl RunSummary {
    /// Percentage saved by the concurrent phase. Only defined when both
    /// phases completed and the sequential one took at least 1 ms.
    pub fn speedup(&self) -> Option<f64> {
        if !self.sequential.is_completed() || !self.concurrent.is_completed() {
            return None;
        }
        calculate_speedup(
            self.sequential.elapsed_millis(),
            self.concurrent.elapsed_millis(),
        )
    }
}

/// Drives the sequential phase then the concurrent one, timing both and
/// cleaning partial output when the concurrent phase is cancelled.
pub struct RunController<C> {
    config: RunConfig,
    resizer: BatchResizer<C>,
    token: CancellationToken,
    state: RunState,
}

impl<C: ImageCodec> RunController<C> {
    pub fn new(config: RunConfig, codec: C, token: CancellationToken) -> Self {
        let resizer = BatchResizer::new(codec).with_parallelism(config.parallelism);
        Self {
            config,
            resizer,
            token,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Executes both phases.
    ///
    /// A sequential failure (including a missing source directory) is
    /// returned as `Err` and the concurrent phase never starts. Anything
    /// that goes wrong once the sequential phase is done, cleanup included,
    /// is reported through the summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        // Nothing is cleaned or created when there is no input
        if !self.config.source_dir.exists() {
            self.transition(RunState::Failed);
            return Err(ResizeError::NotFound(self.config.source_dir.clone()));
        }

        let sequential = self.run_sequential()?;
        let (concurrent, cleaned) = self.run_concurrent();

        Ok(RunSummary {
            sequential,
            concurrent,
            state: self.state,
            cleaned,
        })
    }

    fn run_sequential(&mut self) -> Result<RunResult> {
        self.transition(RunState::RunningSequential);
        let config = &self.config;
        info!("📁 Input: {:?}", config.source_dir);
        info!("📁 Sequential output: {:?}", config.sequential_dir);

        let outcome = clean_directory(&config.sequential_dir).and_then(|()| {
            let started = Instant::now();
            let processed =
                self.resizer
                    .resize_sequential(&config.source_dir, &config.sequential_dir, config.scale)?;
            Ok((started.elapsed(), processed))
        });

        match outcome {
            Ok((elapsed, processed)) => {
                self.transition(RunState::SequentialDone);
                Ok(RunResult {
                    elapsed,
                    outcome: RunOutcome::Completed { processed },
                })
            }
            Err(e) => {
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    fn run_concurrent(&mut self) -> (RunResult, Vec<PathBuf>) {
        self.transition(RunState::RunningConcurrent);
        info!("📁 Concurrent output: {:?}", self.config.concurrent_dir);

        if let Err(e) = clean_directory(&self.config.concurrent_dir) {
            self.transition(RunState::Failed);
            let concurrent = RunResult {
                elapsed: Duration::ZERO,
                outcome: RunOutcome::Failed(e),
            };
            return (concurrent, Vec::new());
        }

        let started = Instant::now();
        let result = self.resizer.resize_concurrent(
            &self.config.source_dir,
            &self.config.concurrent_dir,
            self.config.scale,
            &self.token,
        );
        let concurrent = RunResult::from_result(started.elapsed(), result);

        let cleaned = match &concurrent.outcome {
            RunOutcome::Completed { .. } => {
                self.transition(RunState::ConcurrentDone);
                Vec::new()
            }
            RunOutcome::Cancelled => {
                self.transition(RunState::Cancelled);
                warn!("Run cancelled, removing partial output");
                self.clean_outputs(&[
                    self.config.sequential_dir.clone(),
                    self.config.concurrent_dir.clone(),
                ])
            }
            RunOutcome::Failed(_) => {
                self.transition(RunState::Failed);
                if self.config.clean_on_failure {
                    self.clean_outputs(&[self.config.concurrent_dir.clone()])
                } else {
                    Vec::new()
                }
            }
        };

        (concurrent, cleaned)
    }

    /// Empties each directory, returning the ones that were actually
    /// emptied. A directory that cannot be cleaned is logged and skipped.
    fn clean_outputs(&self, dirs: &[PathBuf]) -> Vec<PathBuf> {
        let mut cleaned = Vec::with_capacity(dirs.len());
        for dir in dirs {
            match clean_directory(dir) {
                Ok(()) => {
                    verbose!("Cleaned {:?}", dir);
                    cleaned.push(dir.clone());
                }
                Err(e) => {
                    error!("{}", e.describe());
                }
            }
        }
        cleaned
    }

    fn transition(&mut self, next: RunState) {
        verbose!("State: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
