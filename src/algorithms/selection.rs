//! Selection sort.

use std::fmt;

use crate::engine::runner::{SortRunner, Step};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    /// Selects the minimum of the unsorted suffix with a strict `<`, so the
    /// first occurrence of the smallest value wins. No self-swap is reported.
    pub(crate) fn selection_sort(&mut self, values: &mut [T]) -> Step {
        let n = values.len();
        if n == 0 {
            return Ok(());
        }

        for i in 0..n - 1 {
            self.checkpoint()?;
            let mut min_index = i;
            self.describe(&format!(
                "Finding minimum element in unsorted portion starting at position {i}"
            ));

            for j in i + 1..n {
                self.checkpoint()?;
                self.compare(&[min_index, j]);
                self.describe(&format!(
                    "Comparing {} at position {min_index} with {} at position {j}",
                    values[min_index], values[j]
                ));

                if values[j] < values[min_index] {
                    min_index = j;
                    self.describe(&format!("Found new minimum: {} at position {j}", values[j]));
                }

                self.step_pause();
            }

            if min_index != i {
                self.exchange(values, i, min_index);
                self.describe(&format!(
                    "Swapped minimum element {} to position {i}",
                    values[i]
                ));
            }

            self.mark_sorted(i);
            self.snapshot(values);
            self.step_pause();
        }

        self.checkpoint()?;
        self.mark_sorted(n - 1);
        Ok(())
    }
}
