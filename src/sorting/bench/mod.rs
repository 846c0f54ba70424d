//! Timed sorting runs.

use std::hint::black_box;
use std::time::Duration;

use rand::Rng;

use super::SortAlgorithm;
use crate::error::SortError;
use crate::utils::bench::{elapsed, now, seeded_rng};
use crate::utils::timer::Variant;

/// Output and elapsed time of one sorting run.
#[derive(Debug, Clone)]
pub struct SortRun {
    pub algorithm: SortAlgorithm,
    pub output: Vec<i32>,
    pub elapsed: Duration,
}

/// Sort `data` once and measure the wall-clock time of the sort alone.
pub fn sort_timed(algorithm: SortAlgorithm, data: &[i32]) -> Result<SortRun, SortError> {
    sort_timed_with_rng(algorithm, data, &mut rand::rng())
}

/// [`sort_timed`] with quick sort pivots drawn from `rng`.
pub fn sort_timed_with_rng<R: Rng + ?Sized>(
    algorithm: SortAlgorithm,
    data: &[i32],
    rng: &mut R,
) -> Result<SortRun, SortError> {
    let start = now();
    let output = black_box(algorithm.sort_with_rng(black_box(data), rng))?;
    let elapsed = elapsed(start);

    Ok(SortRun {
        algorithm,
        output,
        elapsed,
    })
}

/// Build one measurable variant per algorithm over a shared dataset.
///
/// Each variant owns its pivot RNG, seeded from `seed` when given.
pub fn timing_variants<'a>(
    algorithms: &[SortAlgorithm],
    data: &'a [i32],
    seed: Option<u64>,
) -> Vec<Variant<'a>> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let mut rng = seeded_rng(seed);
            Variant {
                name: algorithm.name(),
                description: algorithm.description(),
                run: Box::new(move || {
                    let start = now();
                    let result = algorithm.sort_with_rng(black_box(data), &mut rng);
                    let took = elapsed(start);
                    let _ = black_box(result);
                    took
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_timed_runs_sort() {
        let data = [9, 3, 3, -4, 0, 12, 3];
        let mut rng = seeded_rng(Some(3));
        for algorithm in SortAlgorithm::ALL {
            let run = sort_timed_with_rng(algorithm, &data, &mut rng).unwrap();
            assert_eq!(run.output, vec![-4, 0, 3, 3, 3, 9, 12], "{}", algorithm);
        }
    }

    #[test]
    fn test_timing_variants_run() {
        let data = [4, 1, 3];
        let mut variants = timing_variants(&SortAlgorithm::ALL, &data, Some(1));
        assert_eq!(variants.len(), 5);
        assert_eq!(variants[2].name, "quick sort");
        for variant in &mut variants {
            let _ = (variant.run)();
        }
    }
}
