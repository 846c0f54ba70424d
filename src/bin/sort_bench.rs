//! CLI for benchmarking the sorting algorithms.
//!
//! Usage:
//!   sort-bench                  # Interactive menu
//!   sort-bench all              # Run every algorithm and print the report
//!   sort-bench merge            # Run one algorithm (name or menu number)
//!   sort-bench --list           # List available algorithms
//!   sort-bench --runs 10 all    # Add repeated-run statistics

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sort_bench::config::BenchConfig;
use sort_bench::sorting::SortAlgorithm;
use sort_bench::utils::runner::Selection;
use sort_bench::utils::PinStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sort-bench")]
#[command(version, about = "Benchmark classic sorting algorithms on a generated integer dataset")]
struct Cli {
    /// Algorithm to run (name, slug or menu number), or "all"; omit for the menu
    algorithm: Option<String>,

    /// Run all algorithms
    #[arg(long, conflicts_with = "algorithm")]
    all: bool,

    /// List available algorithms and exit
    #[arg(short, long)]
    list: bool,

    /// Configuration file (default: discover sortbench.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unsorted data file; generated if missing
    #[arg(long)]
    data: Option<PathBuf>,

    /// Number of values to generate
    #[arg(long)]
    count: Option<usize>,

    /// Smallest generated value
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i32>,

    /// Directory for sorted output files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Do not write sorted output files
    #[arg(long)]
    no_save: bool,

    /// Export per-algorithm timings to CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Timed runs per algorithm; above 1 adds a statistics table
    #[arg(short, long)]
    runs: Option<usize>,

    /// Seed for data generation, quick sort pivots and run order
    #[arg(long)]
    seed: Option<u64>,

    /// CPU pinning during repeated runs: off, global, per-execution
    #[arg(long, value_parser = parse_pin)]
    pin: Option<PinStrategy>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pin(s: &str) -> Result<PinStrategy, String> {
    match s {
        "off" => Ok(PinStrategy::Off),
        "global" => Ok(PinStrategy::Global),
        "per-execution" => Ok(PinStrategy::PerExecution),
        other => Err(format!("unknown pin strategy '{}'", other)),
    }
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut BenchConfig) {
        if let Some(path) = &self.data {
            config.data.file = path.clone();
        }
        if let Some(count) = self.count {
            config.data.spec.count = count;
        }
        if let Some(min) = self.min {
            config.data.spec.minimum = min;
        }
        if let Some(max) = self.max {
            config.data.spec.maximum = max;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.no_save {
            config.output.save_sorted = false;
        }
        if self.csv.is_some() {
            config.output.csv = self.csv.clone();
        }
        if let Some(runs) = self.runs {
            config.runner.runs = runs;
        }
        if self.seed.is_some() {
            config.runner.seed = self.seed;
        }
        if let Some(pin) = self.pin {
            config.runner.pin = pin;
        }
    }

    fn selection(&self) -> anyhow::Result<Selection> {
        if self.all {
            return Ok(Selection::All);
        }
        match self.algorithm.as_deref() {
            Some(name) if name.eq_ignore_ascii_case("all") => Ok(Selection::All),
            Some(name) => Ok(Selection::Single(name.parse::<SortAlgorithm>()?)),
            None => {
                let stdin = io::stdin();
                Ok(sort_bench::tui::prompt_selection(stdin.lock(), io::stdout())?)
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list {
        sort_bench::tui::print_available_algorithms();
        return Ok(());
    }

    let mut config = BenchConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);

    sort_bench::tui::print_header();
    let selection = cli.selection()?;
    sort_bench::run_benchmarks(&config, selection)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "sort_bench=debug"
    } else {
        "sort_bench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
