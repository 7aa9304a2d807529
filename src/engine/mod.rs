//! Core sort engine.
//!
//! Couples the algorithms to a visualization:
//! - [`StepSink`]: the reporting/pacing interface a renderer implements
//! - [`SortRunner`]: instrumented execution with live statistics
//! - [`CancellationToken`]: cooperative stop, polled at every loop boundary
//! - [`Pacing`] / [`Playback`]: speed-scaled pauses and interactive control

pub mod cancel;
pub mod pacing;
pub mod runner;
pub mod sink;
pub mod stats;

pub use cancel::CancellationToken;
pub use pacing::{Pacing, Pause, Playback, Speed};
pub use runner::{run, run_named, RunOutcome, SortRunner};
pub use sink::{Role, StepEvent, StepSink};
pub use stats::{format_elapsed, RunStats};
