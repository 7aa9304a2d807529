//! Quick sort with Lomuto partitioning.

use std::fmt;

use crate::engine::runner::{SortRunner, Step, Stopped};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    pub(crate) fn quick_sort(&mut self, values: &mut [T]) -> Step {
        if values.is_empty() {
            return Ok(());
        }
        let high = values.len() - 1;
        self.quick_sort_range(values, 0, high)
    }

    fn quick_sort_range(&mut self, values: &mut [T], low: usize, high: usize) -> Step {
        self.checkpoint()?;
        if low >= high {
            return Ok(());
        }

        self.describe(&format!("Partitioning array from position {low} to {high}"));
        let pivot_index = self.partition(values, low, high)?;

        if pivot_index > low {
            self.quick_sort_range(values, low, pivot_index - 1)?;
        }
        self.quick_sort_range(values, pivot_index + 1, high)
    }

    /// Partition `low..=high` around `values[high]`.
    ///
    /// Elements `<=` pivot end up left of the returned index. The final pivot
    /// exchange is skipped when the pivot is already in place.
    fn partition(&mut self, values: &mut [T], low: usize, high: usize) -> Result<usize, Stopped> {
        self.checkpoint()?;

        let pivot = values[high].clone();
        self.pivot(high);
        self.describe(&format!("Selected pivot: {pivot} at position {high}"));

        // First index of the "greater than pivot" region.
        let mut boundary = low;
        for j in low..high {
            self.checkpoint()?;
            self.compare(&[j, high]);
            self.describe(&format!("Comparing {} with pivot {pivot}", values[j]));

            if values[j] <= pivot {
                if boundary != j {
                    self.exchange(values, boundary, j);
                    self.describe(&format!(
                        "Swapped {} and {} - element <= pivot",
                        values[j], values[boundary]
                    ));
                }
                boundary += 1;
            }

            self.snapshot(values);
            self.step_pause();
        }

        if boundary != high {
            self.exchange(values, boundary, high);
        }

        self.mark_sorted(boundary);
        self.snapshot(values);
        self.step_pause();
        Ok(boundary)
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::engine::{run, CancellationToken, Role};
    use crate::visualization::RecordingSink;

    #[test]
    fn test_quick_single_element_no_comparisons() {
        let mut sink = RecordingSink::new();
        let outcome = run(Algorithm::Quick, vec![1], &mut sink, &CancellationToken::new());
        assert_eq!(outcome.values, vec![1]);
        assert_eq!(outcome.stats.comparisons, 0);
        assert_eq!(sink.count(Role::Compare), 0);
    }

    #[test]
    fn test_quick_pivot_is_last_element() {
        let mut sink = RecordingSink::new();
        let outcome = run(
            Algorithm::Quick,
            vec![3, 6, 1, 5, 2, 4],
            &mut sink,
            &CancellationToken::new(),
        );
        assert_eq!(outcome.values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(sink.indices(Role::Pivot).first(), Some(&vec![5]));
    }

    #[test]
    fn test_quick_skips_in_place_pivot_swap() {
        // Pivot 3 is already the maximum: every element goes left, no final swap.
        let mut sink = RecordingSink::new();
        let outcome = run(Algorithm::Quick, vec![1, 2, 3], &mut sink, &CancellationToken::new());
        assert_eq!(outcome.values, vec![1, 2, 3]);
        assert_eq!(outcome.stats.swaps, 0);
    }

    #[test]
    fn test_quick_pivot_reported_per_partition() {
        let mut sink = RecordingSink::new();
        run(Algorithm::Quick, vec![2, 1], &mut sink, &CancellationToken::new());
        assert_eq!(sink.count(Role::Pivot), 1);
    }
}
