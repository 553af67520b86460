use crate::constants::{
    CLEANUP_PREFIX, CONCURRENT_PREFIX, SEQUENTIAL_PREFIX, SPEEDUP_PREFIX, SUCCESS_PREFIX,
};
use crate::controller::{RunOutcome, RunResult, RunSummary};
use crate::utils::format_speedup;
use crate::{error, info};
use std::error::Error as _;

/// Human-readable lines describing a finished run.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "📊 Resize Summary:".to_string(),
        phase_line(SEQUENTIAL_PREFIX, "Sequential", &summary.sequential),
        phase_line(CONCURRENT_PREFIX, "Concurrent", &summary.concurrent),
    ];

    if summary.concurrent.is_completed() {
        lines.push(format!(
            "  {} Speedup: {}",
            SPEEDUP_PREFIX,
            format_speedup(summary.speedup())
        ));
    }

    if !summary.cleaned.is_empty() {
        let dirs: Vec<String> = summary
            .cleaned
            .iter()
            .map(|dir| format!("{:?}", dir))
            .collect();
        lines.push(format!(
            "  {} Cleaned output directories: {}",
            CLEANUP_PREFIX,
            dirs.join(", ")
        ));
    }

    lines
}

fn phase_line(prefix: &str, label: &str, result: &RunResult) -> String {
    let millis = result.elapsed_millis();
    match &result.outcome {
        RunOutcome::Completed { processed } => format!(
            "  {} {} run: {} files in {} ms",
            prefix, label, processed, millis
        ),
        RunOutcome::Cancelled => {
            format!("  {} {} run cancelled after {} ms", prefix, label, millis)
        }
        RunOutcome::Failed(_) => format!("  {} {} run failed after {} ms", prefix, label, millis),
    }
}

/// Prints the summary, plus the full cause chain of a failed phase.
pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        info!("{}", line);
    }

    if let Some(err) = summary.concurrent.error() {
        error!("Concurrent run failed: {}", err);
        let mut cause = err.source();
        while let Some(inner) = cause {
            error!("  caused by: {}", inner);
            cause = inner.source();
        }
    } else if summary.concurrent.is_completed() {
        info!("{} Done", SUCCESS_PREFIX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RunState;
    use crate::error::ResizeError;
    use std::path::PathBuf;
    use std::time::Duration;

    fn result(ms: u64, outcome: RunOutcome) -> RunResult {
        RunResult {
            elapsed: Duration::from_millis(ms),
            outcome,
        }
    }

    #[test]
    fn test_summary_lines_success() {
        let summary = RunSummary {
            sequential: result(1000, RunOutcome::Completed { processed: 4 }),
            concurrent: result(400, RunOutcome::Completed { processed: 4 }),
            state: RunState::ConcurrentDone,
            cleaned: Vec::new(),
        };

        let lines = summary_lines(&summary);
        assert!(lines.iter().any(|l| l.contains("Sequential run: 4 files in 1000 ms")));
        assert!(lines.iter().any(|l| l.contains("Concurrent run: 4 files in 400 ms")));
        assert!(lines.iter().any(|l| l.contains("Speedup: 60.00%")));
        assert!(!lines.iter().any(|l| l.contains("Cleaned")));
    }

    #[test]
    fn test_summary_lines_zero_sequential_time() {
        let summary = RunSummary {
            sequential: result(0, RunOutcome::Completed { processed: 0 }),
            concurrent: result(0, RunOutcome::Completed { processed: 0 }),
            state: RunState::ConcurrentDone,
            cleaned: Vec::new(),
        };

        let lines = summary_lines(&summary);
        assert!(lines.iter().any(|l| l.contains("Speedup: undefined")));
    }

    #[test]
    fn test_summary_lines_cancelled() {
        let summary = RunSummary {
            sequential: result(900, RunOutcome::Completed { processed: 2 }),
            concurrent: result(120, RunOutcome::Cancelled),
            state: RunState::Cancelled,
            cleaned: vec![PathBuf::from("output1"), PathBuf::from("output2")],
        };

        let lines = summary_lines(&summary);
        assert!(lines.iter().any(|l| l.contains("Concurrent run cancelled after 120 ms")));
        assert!(lines
            .iter()
            .any(|l| l.contains("Cleaned output directories") && l.contains("output2")));
        assert!(!lines.iter().any(|l| l.contains("Speedup")));
    }

    #[test]
    fn test_summary_lines_failed() {
        let summary = RunSummary {
            sequential: result(900, RunOutcome::Completed { processed: 2 }),
            concurrent: result(50, RunOutcome::Failed(ResizeError::InvalidScale(0.0))),
            state: RunState::Failed,
            cleaned: Vec::new(),
        };

        let lines = summary_lines(&summary);
        assert!(lines.iter().any(|l| l.contains("Concurrent run failed after 50 ms")));
        assert!(!lines.iter().any(|l| l.contains("Speedup")));
    }
}
