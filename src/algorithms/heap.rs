//! Heap sort on a max-heap.

use std::fmt;

use crate::engine::runner::{SortRunner, Step};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    /// Builds the heap bottom-up from `n/2 - 1`, then repeatedly moves the
    /// root to the end of the shrinking heap and sifts the new root down.
    pub(crate) fn heap_sort(&mut self, values: &mut [T]) -> Step {
        let n = values.len();
        if n == 0 {
            return Ok(());
        }

        self.describe("Building max heap...");
        for root in (0..n / 2).rev() {
            self.checkpoint()?;
            self.heapify(values, n, root)?;
        }

        for end in (1..n).rev() {
            self.checkpoint()?;
            self.exchange(values, 0, end);
            self.mark_sorted(end);
            self.describe(&format!("Moved max element {} to position {end}", values[end]));
            self.snapshot(values);
            self.heapify(values, end, 0)?;
        }

        self.checkpoint()?;
        self.mark_sorted(0);
        Ok(())
    }

    /// Sift `root` down within the first `heap_size` elements.
    fn heapify(&mut self, values: &mut [T], heap_size: usize, root: usize) -> Step {
        self.checkpoint()?;

        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size {
            self.compare(&[largest, left]);
            if values[left] > values[largest] {
                largest = left;
            }
        }

        if right < heap_size {
            self.compare(&[largest, right]);
            if values[right] > values[largest] {
                largest = right;
            }
        }

        if largest != root {
            self.exchange(values, root, largest);
            self.describe(&format!(
                "Heapifying: swapped {} and {}",
                values[largest], values[root]
            ));
            self.snapshot(values);
            self.step_pause();
            self.heapify(values, heap_size, largest)?;
        }

        Ok(())
    }
}
