//! # sortviz
//!
//! Step-synchronized sorting algorithm visualizer.
//!
//! Every algorithm runs against a [`StepSink`](engine::StepSink) that is told
//! about each comparison, exchange, pivot choice and sorted position, and is
//! asked to pace between steps. The same run can drive:
//! - a live bar chart in the terminal (`sort-tui`, feature `tui`)
//! - a JSON Lines event stream (`sortviz trace`)
//! - plain statistics (`sortviz run`)
//!
//! ## Example
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let mut sink = RecordingSink::new();
//! let cancel = CancellationToken::new();
//! let outcome = run(Algorithm::Merge, vec![5, 3, 8, 1], &mut sink, &cancel);
//!
//! assert_eq!(outcome.values, vec![1, 3, 5, 8]);
//! assert!(outcome.completed);
//! assert_eq!(sink.count(Role::Swap) as u64, outcome.stats.swaps);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Index loops mirror the textbook algorithms
    clippy::manual_midpoint,
)]

pub mod algorithms;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod tui;
pub mod visualization;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algorithms::{Algorithm, Implementation, SortKind};
    pub use crate::catalog::AlgorithmInfo;
    pub use crate::config::{VisualizerConfig, VisualizerConfigBuilder};
    pub use crate::data::{is_sorted, Pattern, SeededRng};
    pub use crate::engine::{
        run, run_named, CancellationToken, Pacing, Playback, Role, RunOutcome, RunStats, Speed,
        StepEvent, StepSink,
    };
    pub use crate::error::{SortError, SortResult};
    pub use crate::visualization::{BarChartState, NullSink, RecordingSink};
}

/// Re-export for public API
pub use error::{SortError, SortResult};
