//! The reporting interface between the runner and a visualization.
//!
//! A [`StepSink`] is a passive collaborator: it is told what the runner is
//! doing and asked to pace, but it never influences which comparison or
//! exchange happens next.

use serde::{Deserialize, Serialize};

use super::pacing::Pause;

/// Role of the indices in a highlight event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Elements being compared (or a range under inspection).
    Compare,
    /// Elements being exchanged.
    Swap,
    /// Pivot of the current partition.
    Pivot,
    /// Elements known to be in their final position.
    Sorted,
}

/// Receiver of runner events.
///
/// Implementations must not panic on out-of-range indices; the runner only
/// reports indices of the array it is sorting, but a sink may be rendering a
/// different array length after a reset.
pub trait StepSink<T> {
    /// Indices about to be compared.
    fn report_comparison(&mut self, indices: &[usize]);

    /// Indices about to be exchanged.
    fn report_swap(&mut self, indices: &[usize]);

    /// Index chosen as pivot.
    fn report_pivot(&mut self, indices: &[usize]);

    /// Indices that reached their final position.
    fn report_sorted(&mut self, indices: &[usize]);

    /// Current contents of the working array.
    fn report_array_state(&mut self, values: &[T]);

    /// Human-readable narration of the current step.
    fn report_description(&mut self, text: &str);

    /// Suspend the runner for the given pause kind.
    fn pace(&mut self, pause: Pause);
}

impl<T, S: StepSink<T> + ?Sized> StepSink<T> for &mut S {
    fn report_comparison(&mut self, indices: &[usize]) {
        (**self).report_comparison(indices);
    }

    fn report_swap(&mut self, indices: &[usize]) {
        (**self).report_swap(indices);
    }

    fn report_pivot(&mut self, indices: &[usize]) {
        (**self).report_pivot(indices);
    }

    fn report_sorted(&mut self, indices: &[usize]) {
        (**self).report_sorted(indices);
    }

    fn report_array_state(&mut self, values: &[T]) {
        (**self).report_array_state(values);
    }

    fn report_description(&mut self, text: &str) {
        (**self).report_description(text);
    }

    fn pace(&mut self, pause: Pause) {
        (**self).pace(pause);
    }
}

/// Owned copy of a single reported event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum StepEvent<T> {
    /// Highlight with a role.
    Highlight {
        /// What the indices are doing.
        role: Role,
        /// Indices involved.
        indices: Vec<usize>,
    },
    /// Snapshot of the working array.
    ArrayState(Vec<T>),
    /// Narration text.
    Description(String),
    /// Pacing request.
    Pace(Pause),
}

impl<T> StepEvent<T> {
    /// Role of a highlight event, if this is one.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Highlight { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// Whether this event is visible output (anything but a pacing request).
    #[must_use]
    pub const fn is_report(&self) -> bool {
        !matches!(self, Self::Pace(_))
    }

    /// Replay this event into another sink.
    pub fn replay_into<S: StepSink<T> + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Highlight { role, indices } => match role {
                Role::Compare => sink.report_comparison(indices),
                Role::Swap => sink.report_swap(indices),
                Role::Pivot => sink.report_pivot(indices),
                Role::Sorted => sink.report_sorted(indices),
            },
            Self::ArrayState(values) => sink.report_array_state(values),
            Self::Description(text) => sink.report_description(text),
            Self::Pace(pause) => sink.pace(*pause),
        }
    }
}
