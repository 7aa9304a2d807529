//! Sorting algorithms and run selection.
//!
//! Six algorithms are implemented for real ([`SortKind`]). Six more are
//! offered in the menu but are placeholders: they announce that they are not
//! implemented and run a documented fallback. [`Implementation`] makes the
//! difference visible in the type system so callers never have to inspect
//! strings to tell a stand-in from the genuine article.
//!
//! | Placeholder | Fallback |
//! |---|---|
//! | shell | insertion |
//! | tim | merge |
//! | intro | quick |
//! | counting | insertion |
//! | radix | insertion |
//! | bucket | insertion |

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, AlgorithmInfo};
use crate::error::SortError;

/// An algorithm that has a real instrumented implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Bubble sort with early exit.
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Top-down merge sort.
    Merge,
    /// Quick sort with Lomuto partition.
    Quick,
    /// Heap sort on a max-heap.
    Heap,
}

impl SortKind {
    /// All implemented algorithms.
    pub const ALL: [Self; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Display name, e.g. `"Bubble Sort"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.as_algorithm().name()
    }

    /// The menu entry for this algorithm.
    #[must_use]
    pub const fn as_algorithm(self) -> Algorithm {
        match self {
            Self::Bubble => Algorithm::Bubble,
            Self::Selection => Algorithm::Selection,
            Self::Insertion => Algorithm::Insertion,
            Self::Merge => Algorithm::Merge,
            Self::Quick => Algorithm::Quick,
            Self::Heap => Algorithm::Heap,
        }
    }

    /// Whether equal elements keep their input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion | Self::Merge)
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_algorithm().id())
    }
}

/// How a menu entry is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Implementation {
    /// A genuine implementation.
    Native(SortKind),
    /// A placeholder that runs `substitute` after announcing it.
    Fallback {
        /// The algorithm that was asked for.
        requested: Algorithm,
        /// The algorithm that actually runs.
        substitute: SortKind,
    },
}

impl Implementation {
    /// The algorithm that actually runs.
    #[must_use]
    pub const fn kind(self) -> SortKind {
        match self {
            Self::Native(kind) | Self::Fallback { substitute: kind, .. } => kind,
        }
    }

    /// Whether this is a stand-in.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Every algorithm offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Bubble sort.
    #[default]
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Merge sort.
    Merge,
    /// Quick sort.
    Quick,
    /// Heap sort.
    Heap,
    /// Placeholder, runs insertion sort.
    Shell,
    /// Placeholder, runs merge sort.
    Tim,
    /// Placeholder, runs quick sort.
    Intro,
    /// Placeholder, runs insertion sort.
    Counting,
    /// Placeholder, runs insertion sort.
    Radix,
    /// Placeholder, runs insertion sort.
    Bucket,
}

impl Algorithm {
    /// All menu entries in display order.
    pub const ALL: [Self; 12] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Shell,
        Self::Tim,
        Self::Intro,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
    ];

    /// Identifier used in config files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Shell => "shell",
            Self::Tim => "tim",
            Self::Intro => "intro",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
        }
    }

    /// Display name, e.g. `"Shell Sort"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Shell => "Shell Sort",
            Self::Tim => "Tim Sort",
            Self::Intro => "Intro Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
        }
    }

    /// How this entry is carried out.
    #[must_use]
    pub fn implementation(self) -> Implementation {
        let fallback = |substitute| Implementation::Fallback {
            requested: self,
            substitute,
        };
        match self {
            Self::Bubble => Implementation::Native(SortKind::Bubble),
            Self::Selection => Implementation::Native(SortKind::Selection),
            Self::Insertion => Implementation::Native(SortKind::Insertion),
            Self::Merge => Implementation::Native(SortKind::Merge),
            Self::Quick => Implementation::Native(SortKind::Quick),
            Self::Heap => Implementation::Native(SortKind::Heap),
            Self::Shell | Self::Counting | Self::Radix | Self::Bucket => {
                fallback(SortKind::Insertion)
            }
            Self::Tim => fallback(SortKind::Merge),
            Self::Intro => fallback(SortKind::Quick),
        }
    }

    /// Whether this entry is a placeholder.
    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self.implementation().is_fallback()
    }

    /// Reference information for the info panel.
    #[must_use]
    pub fn info(self) -> &'static AlgorithmInfo {
        catalog::info(self)
    }

    /// The entry after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `quick`, `Quick`, `quicksort`, `quick-sort`, `quick_sort` and
    /// `quickSort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let stem = normalized.strip_suffix("sort").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|a| a.id() == stem)
            .ok_or_else(|| SortError::unsupported(s))
    }
}
