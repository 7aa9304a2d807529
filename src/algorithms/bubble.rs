//! Bubble sort with early exit.

use std::fmt;

use crate::engine::runner::{SortRunner, Step};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    /// Adjacent-pair passes; the largest remaining element bubbles to the end
    /// of each pass. Stops after the first pass without an exchange, then marks
    /// every position not yet marked.
    pub(crate) fn bubble_sort(&mut self, values: &mut [T]) -> Step {
        let n = values.len();
        if n == 0 {
            return Ok(());
        }

        // Positions `unsorted_end..n` have been marked sorted.
        let mut unsorted_end = n;
        for i in 0..n - 1 {
            self.checkpoint()?;
            let mut swapped = false;

            for j in 0..n - i - 1 {
                self.checkpoint()?;
                self.compare(&[j, j + 1]);
                self.describe(&format!(
                    "Comparing elements at positions {j} and {}: {} and {}",
                    j + 1,
                    values[j],
                    values[j + 1]
                ));

                if values[j] > values[j + 1] {
                    self.exchange(values, j, j + 1);
                    swapped = true;
                    self.describe(&format!(
                        "Swapped {} and {} because {} > {}",
                        values[j + 1],
                        values[j],
                        values[j + 1],
                        values[j]
                    ));
                }

                self.snapshot(values);
                self.step_pause();
            }

            unsorted_end = n - i - 1;
            self.mark_sorted(unsorted_end);

            if !swapped {
                break;
            }
        }

        self.checkpoint()?;
        for index in 0..unsorted_end {
            self.mark_sorted(index);
        }
        Ok(())
    }
}
