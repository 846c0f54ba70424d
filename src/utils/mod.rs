//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{calculate_median, calculate_std_dev, elapsed, now, shuffle, time_seed};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};
