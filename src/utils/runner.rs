//! Benchmark driver: load data, sort, verify, save and report.

use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;

use crate::config::BenchConfig;
use crate::dataset::{ensure_dataset, read_dataset, sorted_output_path, write_dataset};
use crate::error::BenchError;
use crate::integrity::{self, Signature};
use crate::sorting::bench::{sort_timed_with_rng, timing_variants, SortRun};
use crate::sorting::SortAlgorithm;
use crate::utils::bench::seeded_rng;
use crate::utils::timer::{measure_variants, VariantResult};
use crate::utils::tui;

/// What the user asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(SortAlgorithm),
    All,
}

impl Selection {
    /// Map a menu key: `1`..`5` pick one algorithm, `6` runs all of them.
    pub fn from_menu_choice(choice: char) -> Option<Self> {
        let index = choice.to_digit(10)? as usize;
        match index {
            0 => None,
            i if i <= SortAlgorithm::ALL.len() => Some(Selection::Single(SortAlgorithm::ALL[i - 1])),
            i if i == SortAlgorithm::ALL.len() + 1 => Some(Selection::All),
            _ => None,
        }
    }

    pub fn algorithms(self) -> Vec<SortAlgorithm> {
        match self {
            Selection::Single(algorithm) => vec![algorithm],
            Selection::All => SortAlgorithm::ALL.to_vec(),
        }
    }
}

/// RNG used for data generation and quick sort pivots: seeded when configured.
pub fn data_rng(config: &BenchConfig) -> StdRng {
    seeded_rng(config.runner.seed)
}

/// Generate the dataset file if needed, then load it.
pub fn prepare_dataset(config: &BenchConfig) -> Result<Vec<i32>, BenchError> {
    let path = &config.data.file;
    ensure_dataset(path, &config.data.spec, &mut data_rng(config))?;

    tracing::info!(path = %path.display(), "Loading unsorted data");
    let data = read_dataset(path)?;
    tracing::info!(count = data.len(), "Loaded unsorted data successfully");
    Ok(data)
}

/// Tabulate the baseline signature used to check every sorted result.
pub fn tabulate_baseline(data: &[i32]) -> Result<Signature, BenchError> {
    tracing::info!("Tabulating data for post-sort integrity check");
    let baseline = integrity::tabulate(data).map_err(BenchError::Baseline)?;
    tracing::info!(
        min = baseline.min(),
        max = baseline.max(),
        "Data tabulated successfully"
    );
    Ok(baseline)
}

/// Sort, verify and (optionally) save the output of every selected algorithm.
///
/// Stops at the first algorithm whose output fails the integrity check.
pub fn run_selection(
    config: &BenchConfig,
    selection: Selection,
    data: &[i32],
    baseline: &Signature,
) -> Result<Vec<SortRun>, BenchError> {
    let mut runs = Vec::new();
    let mut pivot_rng = data_rng(config);

    for algorithm in selection.algorithms() {
        tracing::info!("Sorting data with the {} algorithm", algorithm);
        let run = sort_timed_with_rng(algorithm, data, &mut pivot_rng)?;
        tracing::info!(elapsed = ?run.elapsed, "Data sort completed");

        if selection == Selection::All {
            println!();
        } else {
            tui::print_elapsed_time(run.elapsed);
        }

        integrity::check_logged(&run.output, baseline)
            .map_err(|source| BenchError::Integrity { algorithm, source })?;

        if config.output.save_sorted {
            save_output(&config.output.directory, &run)?;
        }

        if selection == Selection::All {
            println!("{}\n", "_".repeat(50));
        }
        runs.push(run);
    }

    if selection == Selection::All {
        tui::print_sorting_report(baseline, &runs);
    }

    Ok(runs)
}

fn save_output(dir: &Path, run: &SortRun) -> Result<(), BenchError> {
    let path = sorted_output_path(dir, run.algorithm);
    tracing::info!(path = %path.display(), "Outputting sorted data");
    write_dataset(&path, &run.output)?;
    tracing::info!("Sorted data outputted successfully");
    Ok(())
}

/// Repeated, randomized-order timing of the selected algorithms.
pub fn measure_repeated(
    config: &BenchConfig,
    algorithms: &[SortAlgorithm],
    data: &[i32],
) -> Vec<VariantResult> {
    let timing = config.runner.timing();
    tracing::info!(
        runs = timing.runs_per_variant,
        warmup = timing.warmup_iterations,
        "Collecting repeated timing samples"
    );
    measure_variants(timing_variants(algorithms, data, config.runner.seed), &timing)
}

/// Write one CSV row per run.
pub fn export_csv(path: &Path, baseline: &Signature, runs: &[SortRun]) -> Result<(), BenchError> {
    let report_err = |source: std::io::Error| BenchError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(report_err)?;
    writeln!(file, "algorithm,elements,minimum,maximum,elapsed_ns").map_err(report_err)?;
    for run in runs {
        writeln!(
            file,
            "{},{},{},{},{}",
            run.algorithm.slug(),
            baseline.len(),
            baseline.min(),
            baseline.max(),
            run.elapsed.as_nanos()
        )
        .map_err(report_err)?;
    }
    Ok(())
}

/// Full benchmark: prepare data, run the selection, then optional extras.
pub fn run_benchmarks(config: &BenchConfig, selection: Selection) -> Result<Vec<SortRun>, BenchError> {
    config.data.spec.validate()?;

    let data = prepare_dataset(config)?;
    let baseline = tabulate_baseline(&data)?;
    let runs = run_selection(config, selection, &data, &baseline)?;

    if let Some(path) = &config.output.csv {
        export_csv(path, &baseline, &runs)?;
        tracing::info!(path = %path.display(), "Timings exported");
    }

    if config.runner.runs > 1 {
        let results = measure_repeated(config, &selection.algorithms(), &data);
        tui::print_results_table(&results, data.len());
    }

    Ok(runs)
}
