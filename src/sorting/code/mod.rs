//! Sorting algorithm implementations.
//!
//! Every function takes the dataset by shared reference and returns a new,
//! non-decreasing vector. The input is never modified.

mod bubble;
mod counting;
mod insertion;
mod merge;
mod quick;

pub use bubble::{bubble_sort, bubble_sort_with_stats, BubbleStats};
pub use counting::{counting_sort, MAX_COUNTING_RANGE};
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_with_rng};

pub(crate) use counting::{counting_sort_by_key, min_max, range_len};
