//! Input array generation.
//!
//! Each [`Pattern`] describes an initial arrangement of the bars. Values are
//! always in `1..=size` so the renderer can scale bar heights against the
//! array maximum.

pub mod rng;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;
pub use rng::SeededRng;

/// Initial arrangement of generated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Uniform random values in `1..=size`.
    #[default]
    Random,
    /// `1, 2, ..., size`.
    Sorted,
    /// `size, size - 1, ..., 1`.
    Reverse,
    /// Sorted, then ten percent of the positions randomly swapped.
    Nearly,
    /// Few distinct values (`size / 4`), many repeats.
    Duplicates,
}

impl Pattern {
    /// All patterns in menu order.
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::Sorted,
        Self::Reverse,
        Self::Nearly,
        Self::Duplicates,
    ];

    /// Identifier used in config files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::Nearly => "nearly",
            Self::Duplicates => "duplicates",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Sorted => "Sorted",
            Self::Reverse => "Reverse Sorted",
            Self::Nearly => "Nearly Sorted",
            Self::Duplicates => "Many Duplicates",
        }
    }

    /// The pattern after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Random => Self::Sorted,
            Self::Sorted => Self::Reverse,
            Self::Reverse => Self::Nearly,
            Self::Nearly => Self::Duplicates,
            Self::Duplicates => Self::Random,
        }
    }

    /// Generate `size` values following this pattern.
    #[must_use]
    pub fn generate(self, size: usize, rng: &mut SeededRng) -> Vec<u32> {
        let max = u32::try_from(size).unwrap_or(u32::MAX);
        match self {
            Self::Random => (0..size).map(|_| rng.gen_value(max)).collect(),
            Self::Sorted => (1..=max).collect(),
            Self::Reverse => (1..=max).rev().collect(),
            Self::Nearly => {
                let mut values: Vec<u32> = (1..=max).collect();
                let swaps = size / 10;
                for _ in 0..swaps {
                    let a = rng.gen_index(size);
                    let b = rng.gen_index(size);
                    values.swap(a, b);
                }
                values
            }
            Self::Duplicates => {
                let unique = (max / 4).max(1);
                (0..size).map(|_| rng.gen_value(unique)).collect()
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Pattern {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == needle)
            .ok_or_else(|| SortError::UnknownPattern(s.to_string()))
    }
}

/// Check whether a slice is in non-decreasing order.
#[must_use]
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_reverse() {
        let mut rng = SeededRng::new(1);
        assert_eq!(Pattern::Sorted.generate(5, &mut rng), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pattern::Reverse.generate(5, &mut rng), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_random_values_in_range() {
        let mut rng = SeededRng::new(42);
        let values = Pattern::Random.generate(50, &mut rng);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (1..=50).contains(v)));
    }

    #[test]
    fn test_nearly_is_permutation_of_sorted() {
        let mut rng = SeededRng::new(42);
        let mut values = Pattern::Nearly.generate(40, &mut rng);
        values.sort_unstable();
        assert_eq!(values, (1..=40).collect::<Vec<u32>>());
    }

    #[test]
    fn test_duplicates_have_few_distinct_values() {
        let mut rng = SeededRng::new(42);
        let values = Pattern::Duplicates.generate(40, &mut rng);
        assert!(values.iter().all(|v| (1..=10).contains(v)));
    }

    #[test]
    fn test_duplicates_tiny_size() {
        let mut rng = SeededRng::new(42);
        assert_eq!(Pattern::Duplicates.generate(3, &mut rng), vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_generation() {
        let mut rng = SeededRng::new(42);
        for pattern in Pattern::ALL {
            assert!(pattern.generate(0, &mut rng).is_empty(), "{pattern}");
        }
    }

    #[test]
    fn test_same_seed_same_array() {
        let a = Pattern::Random.generate(30, &mut SeededRng::new(9));
        let b = Pattern::Random.generate(30, &mut SeededRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!("random".parse::<Pattern>().ok(), Some(Pattern::Random));
        assert_eq!(" Nearly ".parse::<Pattern>().ok(), Some(Pattern::Nearly));
        assert!(matches!(
            "zigzag".parse::<Pattern>(),
            Err(SortError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut p = Pattern::Random;
        for _ in 0..Pattern::ALL.len() {
            p = p.next();
        }
        assert_eq!(p, Pattern::Random);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<u32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every pattern yields `size` values inside `1..=size`.
        #[test]
        fn prop_generated_values_in_range(seed in 0u64..10_000, size in 1usize..200) {
            let mut rng = SeededRng::new(seed);
            for pattern in Pattern::ALL {
                let values = pattern.generate(size, &mut rng);
                prop_assert_eq!(values.len(), size);
                let max = u32::try_from(size).unwrap_or(u32::MAX);
                prop_assert!(values.iter().all(|v| (1..=max).contains(v)));
            }
        }

        /// Nearly sorted data is always a permutation of `1..=size`.
        #[test]
        fn prop_nearly_is_permutation(seed in 0u64..10_000, size in 0usize..200) {
            let mut values = Pattern::Nearly.generate(size, &mut SeededRng::new(seed));
            values.sort_unstable();
            let max = u32::try_from(size).unwrap_or(u32::MAX);
            prop_assert_eq!(values, (1..=max).collect::<Vec<u32>>());
        }
    }
}
