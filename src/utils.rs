//! Helpers for turning phase timings into the numbers shown to the user.

use std::time::Duration;

/// Speedup of the concurrent phase over the sequential one as a percentage:
/// `((sequential - concurrent) / sequential) * 100`.
///
/// # Returns
/// * `Some(percent)` - Positive when concurrent was faster, negative when slower
/// * `None` - When the sequential phase took 0 ms and the ratio is undefined
pub fn calculate_speedup(sequential_ms: u128, concurrent_ms: u128) -> Option<f64> {
    if sequential_ms == 0 {
        return None;
    }
    let sequential = sequential_ms as f64;
    Some(((sequential - concurrent_ms as f64) / sequential) * 100.0)
}

/// Renders a speedup with two decimals, or `undefined` when there is none.
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(percent) => format!("{:.2}%", percent),
        None => "undefined".to_string(),
    }
}

pub fn duration_millis(duration: Duration) -> u128 {
    duration.as_millis()
}
