//! Live run statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters accumulated by the runner during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Element comparisons performed.
    pub comparisons: u64,
    /// Element exchanges (insertion-sort shifts included).
    pub swaps: u64,
    /// Array-state reports sent to the sink.
    pub accesses: u64,
    /// Wall-clock duration of the run, pacing included.
    pub elapsed: Duration,
}

impl RunStats {
    /// Elapsed time formatted for display.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Format a duration as `"340ms"`, `"12.5s"` or `"2m 3.4s"`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1_000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.1}s", elapsed.as_secs_f64())
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) as f64 / 1_000.0;
        format!("{minutes}m {seconds:.1}s")
    }
}
