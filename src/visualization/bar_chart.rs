//! Per-bar highlight state for a bar-chart renderer.
//!
//! Highlight rules:
//! - a comparison or swap clears every transient highlight first;
//! - a pivot is added on top of the current highlights;
//! - sorted clears the transient highlight of those bars and sticks until the
//!   chart is reloaded.

use serde::Serialize;

use crate::engine::{Pause, RunStats, StepSink};

/// Visual state of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarState {
    /// No highlight.
    #[default]
    Idle,
    /// Being compared.
    Comparing,
    /// Being exchanged.
    Swapping,
    /// Pivot of the current partition.
    Pivot,
    /// In its final position.
    Sorted,
}

/// Renderable state of the array being sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChartState<T> {
    values: Vec<T>,
    highlights: Vec<BarState>,
    sorted: Vec<bool>,
    description: String,
    stats: RunStats,
}

impl<T: Clone> BarChartState<T> {
    /// Chart over `values` with no highlights.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            values,
            highlights: vec![BarState::Idle; len],
            sorted: vec![false; len],
            description: String::new(),
            stats: RunStats::default(),
        }
    }

    /// Replace the array, clearing highlights, sorted marks and counters.
    pub fn load(&mut self, values: Vec<T>, description: &str) {
        *self = Self::new(values);
        self.description = description.to_owned();
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the chart has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// State of bar `index`. A transient highlight shows over the sorted mark.
    #[must_use]
    pub fn bar_state(&self, index: usize) -> BarState {
        match self.highlights.get(index) {
            Some(state) if *state != BarState::Idle => *state,
            _ if self.sorted.get(index).copied().unwrap_or(false) => BarState::Sorted,
            _ => BarState::Idle,
        }
    }

    /// Iterate `(value, state)` pairs in bar order.
    pub fn bars(&self) -> impl Iterator<Item = (&T, BarState)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (value, self.bar_state(index)))
    }

    /// Last narration text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the narration text directly (UI status messages).
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Counters derived from the event stream.
    ///
    /// Array states and swaps match the runner exactly. Comparisons count
    /// every compare highlight, so range focus is included until
    /// [`Self::set_stats`] installs the runner's final numbers.
    #[must_use]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Replace the counters with authoritative ones.
    pub fn set_stats(&mut self, stats: RunStats) {
        self.stats = stats;
    }

    /// Number of bars currently marked sorted.
    #[must_use]
    pub fn sorted_count(&self) -> usize {
        self.sorted.iter().filter(|s| **s).count()
    }

    fn clear_highlights(&mut self) {
        self.highlights.fill(BarState::Idle);
    }

    fn set(&mut self, indices: &[usize], state: BarState) {
        for &index in indices {
            if let Some(slot) = self.highlights.get_mut(index) {
                *slot = state;
            }
        }
    }
}

impl<T: Clone> StepSink<T> for BarChartState<T> {
    fn report_comparison(&mut self, indices: &[usize]) {
        self.clear_highlights();
        self.set(indices, BarState::Comparing);
        self.stats.comparisons += 1;
    }

    fn report_swap(&mut self, indices: &[usize]) {
        self.clear_highlights();
        self.set(indices, BarState::Swapping);
        self.stats.swaps += 1;
    }

    fn report_pivot(&mut self, indices: &[usize]) {
        self.set(indices, BarState::Pivot);
    }

    fn report_sorted(&mut self, indices: &[usize]) {
        for &index in indices {
            if let Some(mark) = self.sorted.get_mut(index) {
                *mark = true;
            }
            if let Some(slot) = self.highlights.get_mut(index) {
                *slot = BarState::Idle;
            }
        }
    }

    fn report_array_state(&mut self, values: &[T]) {
        values.clone_into(&mut self.values);
        self.highlights.resize(values.len(), BarState::Idle);
        self.sorted.resize(values.len(), false);
        self.stats.accesses += 1;
    }

    fn report_description(&mut self, text: &str) {
        text.clone_into(&mut self.description);
    }

    fn pace(&mut self, _pause: Pause) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::engine::{run, CancellationToken};

    #[test]
    fn test_compare_clears_previous_highlights() {
        let mut chart = BarChartState::new(vec![3, 1, 2]);
        chart.report_swap(&[0, 1]);
        chart.report_comparison(&[1, 2]);
        assert_eq!(chart.bar_state(0), BarState::Idle);
        assert_eq!(chart.bar_state(1), BarState::Comparing);
        assert_eq!(chart.bar_state(2), BarState::Comparing);
    }

    #[test]
    fn test_pivot_adds_to_highlights() {
        let mut chart = BarChartState::new(vec![3, 1, 2]);
        chart.report_comparison(&[0, 1]);
        chart.report_pivot(&[2]);
        assert_eq!(chart.bar_state(0), BarState::Comparing);
        assert_eq!(chart.bar_state(2), BarState::Pivot);
    }

    #[test]
    fn test_sorted_sticks_through_later_highlights() {
        let mut chart = BarChartState::new(vec![1, 2, 3]);
        chart.report_pivot(&[2]);
        chart.report_sorted(&[2]);
        assert_eq!(chart.bar_state(2), BarState::Sorted);

        chart.report_comparison(&[0, 1]);
        assert_eq!(chart.bar_state(2), BarState::Sorted);
        assert_eq!(chart.sorted_count(), 1);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut chart = BarChartState::new(vec![1]);
        chart.report_comparison(&[0, 7]);
        chart.report_sorted(&[9]);
        assert_eq!(chart.bar_state(0), BarState::Comparing);
        assert_eq!(chart.bar_state(9), BarState::Idle);
    }

    #[test]
    fn test_load_resets_everything() {
        let mut chart = BarChartState::new(vec![2, 1]);
        chart.report_sorted(&[0, 1]);
        chart.report_array_state(&[1, 2]);
        chart.load(vec![5, 4, 3], "Array generated.");
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.sorted_count(), 0);
        assert_eq!(chart.stats().accesses, 0);
        assert_eq!(chart.description(), "Array generated.");
    }

    #[test]
    fn test_completed_run_marks_every_bar_sorted() {
        let mut chart = BarChartState::new(vec![5, 3, 8, 1]);
        let outcome = run(
            Algorithm::Bubble,
            vec![5, 3, 8, 1],
            &mut chart,
            &CancellationToken::new(),
        );
        assert_eq!(chart.values(), outcome.values.as_slice());
        assert!(chart.bars().all(|(_, state)| state == BarState::Sorted));
        assert_eq!(chart.stats().swaps, outcome.stats.swaps);
        assert_eq!(chart.stats().accesses, outcome.stats.accesses);
        assert_eq!(chart.description(), "Bubble Sort completed! Array is now sorted.");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::algorithms::SortKind;
    use crate::engine::{run, CancellationToken};
    use proptest::prelude::*;

    proptest! {
        /// A chart fed a full run ends on the sorted array with every bar sorted.
        #[test]
        fn prop_chart_tracks_full_run(values in prop::collection::vec(1u32..100, 1..30)) {
            for kind in SortKind::ALL {
                let mut chart = BarChartState::new(values.clone());
                let outcome = run(
                    kind.as_algorithm(),
                    values.clone(),
                    &mut chart,
                    &CancellationToken::new(),
                );
                prop_assert_eq!(chart.values(), outcome.values.as_slice());
                prop_assert_eq!(chart.sorted_count(), values.len());
                prop_assert!(chart.bars().all(|(_, state)| state == BarState::Sorted));
            }
        }
    }
}
