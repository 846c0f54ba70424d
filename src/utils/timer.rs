//! Repeated timing of sorting algorithms.
//!
//! This module provides:
//! - Warmup runs before anything is recorded
//! - Randomized execution order across algorithms to avoid ordering bias
//! - Optional CPU pinning of the measuring thread
//! - Summary statistics per algorithm

use std::hint::black_box;
use std::time::Duration;

use serde::Deserialize;

use super::bench::{calculate_median, calculate_std_dev, shuffle, time_seed};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinStrategy {
    /// Never pin
    Off,
    /// Pin once before all measurements
    #[default]
    Global,
    /// Pin and unpin around every single run
    PerExecution,
}

/// Configuration for repeated timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant
    pub runs_per_variant: usize,
    /// Number of unrecorded runs per variant before measurement
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Seed for the execution order; time-based when `None`
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 5,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::default(),
            seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs once and returns the time taken by the measured part.
    pub run: Box<dyn FnMut() -> Duration + 'a>,
}

/// Summary of all samples collected for one variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of recorded samples
    pub runs: usize,
}

impl VariantResult {
    /// Coefficient of variation (std dev / mean), zero for a zero mean.
    pub fn cv(&self) -> f64 {
        let avg = self.avg_time.as_nanos() as f64;
        if avg > 0.0 {
            self.std_dev.as_nanos() as f64 / avg
        } else {
            0.0
        }
    }
}

/// Measure multiple variants with randomized execution order.
///
/// Results are returned in the same order as `variants`.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    shuffle(&mut tasks, config.seed.unwrap_or_else(time_seed));

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for variant_idx in tasks {
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let took = (variants[variant_idx].run)();
        measurements[variant_idx].push(took);
    }

    variants
        .iter()
        .zip(measurements)
        .map(|(variant, times)| summarize(variant.name, variant.description, &times))
        .collect()
}

fn summarize(name: &str, description: &str, times: &[Duration]) -> VariantResult {
    let runs = times.len();
    let (min_time, max_time, avg_time) = match (times.iter().min(), times.iter().max()) {
        (Some(&min), Some(&max)) => (min, max, times.iter().sum::<Duration>() / runs as u32),
        _ => (Duration::ZERO, Duration::ZERO, Duration::ZERO),
    };

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time,
        median_time: calculate_median(times),
        min_time,
        max_time,
        std_dev: calculate_std_dev(times, avg_time),
        runs,
    }
}
