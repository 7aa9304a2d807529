//! Visualization sinks for sortviz.
//!
//! Provides the [`StepSink`] implementations the crate ships with:
//! - [`BarChartState`]: per-bar highlight state for a bar-chart renderer
//! - [`EventStream`]: JSON Lines export of the event stream
//! - [`RecordingSink`]: owned event log for tests and replay
//! - [`NullSink`]: discards everything (benchmarks, headless runs)
//!
//! # Example
//!
//! ```rust
//! use sortviz::algorithms::Algorithm;
//! use sortviz::engine::{run, CancellationToken};
//! use sortviz::visualization::RecordingSink;
//!
//! let mut sink = RecordingSink::new();
//! let outcome = run(Algorithm::Bubble, vec![3, 1, 2], &mut sink, &CancellationToken::new());
//! assert_eq!(outcome.values, vec![1, 2, 3]);
//! assert!(!sink.events().is_empty());
//! ```

mod bar_chart;
mod export;

pub use bar_chart::{BarChartState, BarState};
pub use export::EventStream;

use crate::engine::{Pause, Role, StepEvent, StepSink};

// ============================================================================
// Recording
// ============================================================================

/// Sink that keeps an owned copy of every reported event.
///
/// Pacing requests are counted but not stored, so [`Self::events`] holds only
/// what a viewer would see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSink<T> {
    events: Vec<StepEvent<T>>,
    paces: usize,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            paces: 0,
        }
    }
}

impl<T> RecordingSink<T> {
    /// Create an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in report order.
    #[must_use]
    pub fn events(&self) -> &[StepEvent<T>] {
        &self.events
    }

    /// Consume the recording.
    #[must_use]
    pub fn into_events(self) -> Vec<StepEvent<T>> {
        self.events
    }

    /// Number of pacing requests received.
    #[must_use]
    pub const fn pace_count(&self) -> usize {
        self.paces
    }

    /// Number of highlight events with `role`.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.events.iter().filter(|e| e.role() == Some(role)).count()
    }

    /// Index lists of every highlight event with `role`, in order.
    #[must_use]
    pub fn indices(&self, role: Role) -> Vec<Vec<usize>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                StepEvent::Highlight { role: r, indices } if *r == role => Some(indices.clone()),
                _ => None,
            })
            .collect()
    }

    /// Narration texts, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                StepEvent::Description(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last reported array snapshot.
    #[must_use]
    pub fn last_array_state(&self) -> Option<&[T]> {
        self.events.iter().rev().find_map(|event| match event {
            StepEvent::ArrayState(values) => Some(values.as_slice()),
            _ => None,
        })
    }

    fn highlight(&mut self, role: Role, indices: &[usize]) {
        self.events.push(StepEvent::Highlight {
            role,
            indices: indices.to_vec(),
        });
    }
}

impl<T: Clone> StepSink<T> for RecordingSink<T> {
    fn report_comparison(&mut self, indices: &[usize]) {
        self.highlight(Role::Compare, indices);
    }

    fn report_swap(&mut self, indices: &[usize]) {
        self.highlight(Role::Swap, indices);
    }

    fn report_pivot(&mut self, indices: &[usize]) {
        self.highlight(Role::Pivot, indices);
    }

    fn report_sorted(&mut self, indices: &[usize]) {
        self.highlight(Role::Sorted, indices);
    }

    fn report_array_state(&mut self, values: &[T]) {
        self.events.push(StepEvent::ArrayState(values.to_vec()));
    }

    fn report_description(&mut self, text: &str) {
        self.events.push(StepEvent::Description(text.to_owned()));
    }

    fn pace(&mut self, _pause: Pause) {
        self.paces += 1;
    }
}

// ============================================================================
// Null
// ============================================================================

/// Sink that ignores every event and never pauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl<T> StepSink<T> for NullSink {
    fn report_comparison(&mut self, _indices: &[usize]) {}
    fn report_swap(&mut self, _indices: &[usize]) {}
    fn report_pivot(&mut self, _indices: &[usize]) {}
    fn report_sorted(&mut self, _indices: &[usize]) {}
    fn report_array_state(&mut self, _values: &[T]) {}
    fn report_description(&mut self, _text: &str) {}
    fn pace(&mut self, _pause: Pause) {}
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::engine::{run, CancellationToken};

    #[test]
    fn test_recording_sink_counts_roles() {
        let mut sink = RecordingSink::<u32>::new();
        sink.report_comparison(&[0, 1]);
        sink.report_swap(&[0, 1]);
        sink.report_comparison(&[1, 2]);
        assert_eq!(sink.count(Role::Compare), 2);
        assert_eq!(sink.indices(Role::Swap), vec![vec![0, 1]]);
        assert_eq!(sink.count(Role::Pivot), 0);
    }

    #[test]
    fn test_recording_sink_keeps_paces_out_of_events() {
        let mut sink = RecordingSink::<u32>::new();
        sink.pace(Pause::Compare);
        sink.pace(Pause::Step);
        assert!(sink.events().is_empty());
        assert_eq!(sink.pace_count(), 2);
    }

    #[test]
    fn test_recording_sink_last_array_state() {
        let mut sink = RecordingSink::new();
        assert!(sink.last_array_state().is_none());
        sink.report_array_state(&[3, 2, 1]);
        sink.report_description("x");
        sink.report_array_state(&[1, 2, 3]);
        assert_eq!(sink.last_array_state(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_replay_reproduces_recording() {
        let mut original = RecordingSink::new();
        run(Algorithm::Quick, vec![5, 1, 4, 2, 3], &mut original, &CancellationToken::new());

        let mut copy = RecordingSink::new();
        for event in original.events() {
            event.replay_into(&mut copy);
        }
        assert_eq!(original.events(), copy.events());
    }

    #[test]
    fn test_null_sink_runs_to_completion() {
        let outcome = run(Algorithm::Heap, vec![3, 1, 2], &mut NullSink, &CancellationToken::new());
        assert_eq!(outcome.values, vec![1, 2, 3]);
        assert!(outcome.completed);
    }
}
