//! Insertion sort.

use std::fmt;

use crate::engine::runner::{SortRunner, Step};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    /// Shifts elements right while they are strictly greater than the key, so
    /// equal elements keep their order. Each shift is reported as an exchange.
    ///
    /// On a stop the key is still written back into the hole, keeping the
    /// array a permutation of the input.
    pub(crate) fn insertion_sort(&mut self, values: &mut [T]) -> Step {
        let n = values.len();
        if n == 0 {
            return Ok(());
        }

        self.mark_sorted(0);

        for i in 1..n {
            self.checkpoint()?;
            let key = values[i].clone();
            self.describe(&format!(
                "Inserting element {key} from position {i} into sorted portion"
            ));
            self.highlight(&[i]);

            // `hole` is where the key will land.
            let mut hole = i;
            while hole > 0 && !self.is_stopped() {
                self.compare(&[hole - 1, hole]);
                if values[hole - 1] <= key {
                    break;
                }
                self.describe(&format!(
                    "Moving {} from position {} to position {hole}",
                    values[hole - 1],
                    hole - 1
                ));
                self.shift(values, hole - 1, hole);
                hole -= 1;

                self.snapshot(values);
                self.step_pause();
            }

            values[hole] = key;
            self.checkpoint()?;

            self.mark_sorted(hole);
            self.describe(&format!("Placed {} at position {hole}", values[hole]));
            self.snapshot(values);
            self.step_pause();
        }

        Ok(())
    }
}
