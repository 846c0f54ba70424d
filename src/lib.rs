//! # Sort-Bench
//!
//! Benchmarks five classic sorting algorithms (counting, merge, quick,
//! bubble, insertion) over a generated dataset of bounded integers, checks
//! every result against a frequency signature of the input and reports
//! the timings.

pub mod config;
pub mod dataset;
pub mod error;
pub mod integrity;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::error::{BenchError, IntegrityError, SortError};
    pub use crate::integrity::{check, tabulate, verify, Signature};
    pub use crate::sorting::bench::{sort_timed, SortRun};
    pub use crate::sorting::SortAlgorithm;
    pub use crate::utils::runner::Selection;
}
