//! The instrumented sort runner.
//!
//! [`SortRunner`] owns the reporting helpers shared by every algorithm: each
//! comparison, exchange and sorted-mark goes through one of them so the
//! statistics and the event stream can never disagree. The algorithms
//! themselves live in [`crate::algorithms`] as methods on this type.

use std::fmt;
use std::marker::PhantomData;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::cancel::CancellationToken;
use super::pacing::Pause;
use super::sink::StepSink;
use super::stats::RunStats;
use crate::algorithms::{Algorithm, Implementation, SortKind};
use crate::error::SortResult;

/// Marker returned when the stop flag was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stopped;

/// Result of one instrumented unit of work.
pub(crate) type Step = Result<(), Stopped>;

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome<T> {
    /// Algorithm that was requested.
    pub algorithm: Algorithm,
    /// Algorithm that actually ran (differs for placeholders).
    pub executed: SortKind,
    /// Final array; partially sorted when `completed` is false.
    pub values: Vec<T>,
    /// Counters for the run.
    pub stats: RunStats,
    /// False when the run was stopped before the algorithm finished.
    pub completed: bool,
}

/// Drives one algorithm over a working array, reporting into a sink.
pub struct SortRunner<'s, T, S: ?Sized> {
    sink: &'s mut S,
    cancel: CancellationToken,
    stats: RunStats,
    _values: PhantomData<fn(&mut [T])>,
}

impl<'s, T, S> SortRunner<'s, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    /// Create a runner reporting into `sink` and polling `cancel`.
    pub fn new(sink: &'s mut S, cancel: &CancellationToken) -> Self {
        Self {
            sink,
            cancel: cancel.clone(),
            stats: RunStats::default(),
            _values: PhantomData,
        }
    }

    /// Run `algorithm` over `values`.
    ///
    /// Placeholders announce their substitution exactly once and then run
    /// their fallback. When the stop flag is already set, nothing is reported
    /// and `values` is returned untouched. A stop observed at any point,
    /// including the last pause, makes the run incomplete and suppresses the
    /// completion report.
    pub fn execute(mut self, algorithm: Algorithm, mut values: Vec<T>) -> RunOutcome<T> {
        let started = Instant::now();
        let implementation = algorithm.implementation();
        let kind = implementation.kind();
        info!(algorithm = %algorithm, size = values.len(), "sort run started");

        let result = self.checkpoint().and_then(|()| {
            if let Implementation::Fallback {
                requested,
                substitute,
            } = implementation
            {
                warn!(requested = %requested, substitute = %substitute, "placeholder algorithm");
                self.describe(&format!(
                    "{} is not implemented yet, falling back to {}",
                    requested.name(),
                    substitute.name()
                ));
            }
            self.dispatch(kind, &mut values)
        });
        // A stop raised during the last pause still counts as a stop.
        let result = result.and_then(|()| self.checkpoint());

        let completed = result.is_ok();
        if completed && !values.is_empty() {
            let all: Vec<usize> = (0..values.len()).collect();
            self.sink.report_sorted(&all);
            self.describe(&format!("{} completed! Array is now sorted.", kind.name()));
        }
        if !completed {
            debug!(algorithm = %algorithm, "sort run stopped");
        }

        self.stats.elapsed = started.elapsed();
        info!(
            algorithm = %algorithm,
            comparisons = self.stats.comparisons,
            swaps = self.stats.swaps,
            completed,
            "sort run finished"
        );

        RunOutcome {
            algorithm,
            executed: kind,
            values,
            stats: self.stats,
            completed,
        }
    }

    fn dispatch(&mut self, kind: SortKind, values: &mut [T]) -> Step {
        match kind {
            SortKind::Bubble => self.bubble_sort(values),
            SortKind::Selection => self.selection_sort(values),
            SortKind::Insertion => self.insertion_sort(values),
            SortKind::Merge => self.merge_sort(values),
            SortKind::Quick => self.quick_sort(values),
            SortKind::Heap => self.heap_sort(values),
        }
    }

    // ===== Instrumentation helpers used by the algorithms =====

    /// Poll the stop flag.
    pub(crate) fn checkpoint(&self) -> Step {
        if self.cancel.is_cancelled() {
            Err(Stopped)
        } else {
            Ok(())
        }
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Report and count one comparison between the given indices.
    pub(crate) fn compare(&mut self, indices: &[usize]) {
        self.sink.report_comparison(indices);
        self.sink.pace(Pause::Compare);
        self.stats.comparisons += 1;
    }

    /// Focus a range without comparing (merge ranges, insertion key).
    pub(crate) fn highlight(&mut self, indices: &[usize]) {
        self.sink.report_comparison(indices);
        self.sink.pace(Pause::Compare);
    }

    /// Report the exchange of `a` and `b`, then perform it.
    pub(crate) fn exchange(&mut self, values: &mut [T], a: usize, b: usize) {
        self.sink.report_swap(&[a, b]);
        self.sink.pace(Pause::Swap);
        values.swap(a, b);
        self.stats.swaps += 1;
    }

    /// Report a one-way move from `from` into the hole at `to`.
    pub(crate) fn shift(&mut self, values: &mut [T], from: usize, to: usize) {
        self.sink.report_swap(&[from, to]);
        self.sink.pace(Pause::Swap);
        values[to] = values[from].clone();
        self.stats.swaps += 1;
    }

    pub(crate) fn pivot(&mut self, index: usize) {
        self.sink.report_pivot(&[index]);
    }

    pub(crate) fn mark_sorted(&mut self, index: usize) {
        self.sink.report_sorted(&[index]);
    }

    pub(crate) fn describe(&mut self, text: &str) {
        self.sink.report_description(text);
    }

    pub(crate) fn snapshot(&mut self, values: &[T]) {
        self.sink.report_array_state(values);
        self.stats.accesses += 1;
    }

    /// Speed-scaled delay after the array changed.
    pub(crate) fn step_pause(&mut self) {
        self.sink.pace(Pause::Step);
    }
}

/// Run `algorithm` over `values`, reporting into `sink`.
pub fn run<T, S>(
    algorithm: Algorithm,
    values: Vec<T>,
    sink: &mut S,
    cancel: &CancellationToken,
) -> RunOutcome<T>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    SortRunner::new(sink, cancel).execute(algorithm, values)
}

/// Resolve `name` and run it.
///
/// # Errors
///
/// Returns [`crate::SortError::UnsupportedAlgorithm`] when `name` matches
/// neither a real algorithm nor a documented placeholder. Nothing is reported
/// to the sink in that case.
pub fn run_named<T, S>(
    name: &str,
    values: Vec<T>,
    sink: &mut S,
    cancel: &CancellationToken,
) -> SortResult<RunOutcome<T>>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    let algorithm: Algorithm = name.parse()?;
    Ok(run(algorithm, values, sink, cancel))
}
