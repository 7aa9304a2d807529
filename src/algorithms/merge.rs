//! Top-down merge sort.

use std::fmt;

use crate::engine::runner::{SortRunner, Step};
use crate::engine::StepSink;

impl<T, S> SortRunner<'_, T, S>
where
    T: Ord + Clone + fmt::Display,
    S: StepSink<T> + ?Sized,
{
    pub(crate) fn merge_sort(&mut self, values: &mut [T]) -> Step {
        if values.is_empty() {
            return Ok(());
        }
        let right = values.len() - 1;
        self.merge_sort_range(values, 0, right)
    }

    /// Sort the inclusive range `left..=right`, splitting at the floor midpoint.
    fn merge_sort_range(&mut self, values: &mut [T], left: usize, right: usize) -> Step {
        self.checkpoint()?;
        if left >= right {
            return Ok(());
        }

        let mid = left + (right - left) / 2;
        self.describe(&format!(
            "Dividing array from position {left} to {right} at midpoint {mid}"
        ));
        let range: Vec<usize> = (left..=right).collect();
        self.highlight(&range);
        self.step_pause();

        self.merge_sort_range(values, left, mid)?;
        self.merge_sort_range(values, mid + 1, right)?;
        self.merge(values, left, mid, right)
    }

    /// Stable merge of `left..=mid` and `mid+1..=right`; ties take the left.
    ///
    /// When stopped mid-merge the unconsumed halves are written back in order
    /// so no element is lost.
    fn merge(&mut self, values: &mut [T], left: usize, mid: usize, right: usize) -> Step {
        self.checkpoint()?;

        let left_half = values[left..=mid].to_vec();
        let right_half = values[mid + 1..=right].to_vec();
        self.describe(&format!(
            "Merging subarrays [{left}..{mid}] and [{}..{right}]",
            mid + 1
        ));

        let (mut i, mut j, mut k) = (0, 0, left);

        while i < left_half.len() && j < right_half.len() {
            if self.is_stopped() {
                flush(values, k, &left_half[i..], &right_half[j..]);
                return self.checkpoint();
            }
            self.compare(&[left + i, mid + 1 + j]);

            if left_half[i] <= right_half[j] {
                values[k] = left_half[i].clone();
                i += 1;
                self.describe(&format!("Taking {} from left subarray", left_half[i - 1]));
            } else {
                values[k] = right_half[j].clone();
                j += 1;
                self.describe(&format!("Taking {} from right subarray", right_half[j - 1]));
            }

            k += 1;
            self.snapshot(values);
            self.step_pause();
        }

        for rest in [&left_half[i..], &right_half[j..]] {
            for (offset, value) in rest.iter().enumerate() {
                if self.is_stopped() {
                    flush(values, k, &rest[offset..], &[]);
                    return self.checkpoint();
                }
                values[k] = value.clone();
                k += 1;
                self.snapshot(values);
                self.step_pause();
            }
        }

        let range: Vec<usize> = (left..=right).collect();
        self.highlight(&range);
        self.step_pause();
        Ok(())
    }
}

/// Write the unconsumed parts of both halves back starting at `k`.
fn flush<T: Clone>(values: &mut [T], mut k: usize, left_rest: &[T], right_rest: &[T]) {
    for value in left_rest.iter().chain(right_rest) {
        values[k] = value.clone();
        k += 1;
    }
}
