//! # Sorting Algorithms
//!
//! Five classic comparison and distribution sorts over bounded integers:
//!
//! | Algorithm | Average     | Stable | Notes                                  |
//! |-----------|-------------|--------|----------------------------------------|
//! | counting  | O(n + k)    | yes    | needs a small value range `k`          |
//! | merge     | O(n log n)  | yes    | allocates new halves per level         |
//! | quick     | O(n log n)  | no     | random pivot, O(n²) worst case         |
//! | bubble    | O(n²)       | yes    | exits early once a pass makes no swap  |
//! | insertion | O(n²)       | yes    | O(n) on already sorted input           |
//!
//! [`SortAlgorithm`] is the single dispatch point used by the driver.

pub mod bench;
pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{ConfigError, SortError};

/// One of the benchmarked sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Counting,
    Merge,
    Quick,
    Bubble,
    Insertion,
}

impl SortAlgorithm {
    /// All algorithms in menu order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Counting,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
    ];

    /// Display name, also used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Counting => "counting sort",
            SortAlgorithm::Merge => "merge sort",
            SortAlgorithm::Quick => "quick sort",
            SortAlgorithm::Bubble => "bubble sort",
            SortAlgorithm::Insertion => "insertion sort",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SortAlgorithm::Counting => "counting-sort",
            SortAlgorithm::Merge => "merge-sort",
            SortAlgorithm::Quick => "quick-sort",
            SortAlgorithm::Bubble => "bubble-sort",
            SortAlgorithm::Insertion => "insertion-sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SortAlgorithm::Counting => "Stable distribution sort over a dense count array",
            SortAlgorithm::Merge => "Top-down recursive merge sort",
            SortAlgorithm::Quick => "Quick sort with a uniformly random pivot",
            SortAlgorithm::Bubble => "Adjacent-swap passes with early exit",
            SortAlgorithm::Insertion => "Shift-and-insert over a working copy",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, SortAlgorithm::Quick)
    }

    /// 1-based position in the interactive menu.
    pub fn menu_index(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).map_or(0, |i| i + 1)
    }

    /// Sort `data` into a new vector, drawing quick sort pivots from the
    /// thread-local RNG.
    pub fn sort(self, data: &[i32]) -> Result<Vec<i32>, SortError> {
        self.sort_with_rng(data, &mut rand::rng())
    }

    /// Sort `data` into a new vector. Only quick sort consumes `rng`.
    pub fn sort_with_rng<R: Rng + ?Sized>(
        self,
        data: &[i32],
        rng: &mut R,
    ) -> Result<Vec<i32>, SortError> {
        Ok(match self {
            SortAlgorithm::Counting => counting_sort(data)?,
            SortAlgorithm::Merge => merge_sort(data),
            SortAlgorithm::Quick => quick_sort_with_rng(data, rng),
            SortAlgorithm::Bubble => bubble_sort(data),
            SortAlgorithm::Insertion => insertion_sort(data),
        })
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ConfigError;

    /// Accepts a display name, slug, short name or 1-based menu index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();

        if let Ok(index) = key.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()));
        }

        let short = key
            .trim_end_matches(" sort")
            .trim_end_matches("-sort")
            .trim_end_matches("_sort");

        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == key || a.slug() == key || a.slug().trim_end_matches("-sort") == short)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}
