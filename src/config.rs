//! Configuration loading from `sortbench.toml`.
//!
//! The file is discovered by walking up from the current directory. Every
//! field is optional; command-line flags override whatever the file sets.
//!
//! ```toml
//! [data]
//! file = "UnsortedData.txt"
//! count = 10000
//! minimum = 0
//! maximum = 1000
//!
//! [output]
//! directory = "."
//! save_sorted = true
//! # csv = "timings.csv"
//!
//! [runner]
//! runs = 1
//! warmup = 1
//! # seed = 12345
//! pin = "global"   # "off", "global" or "per-execution"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dataset::{DatasetSpec, UNSORTED_DATA_FILENAME};
use crate::error::ConfigError;
use crate::utils::timer::{PinStrategy, TimingConfig};

/// Name of the configuration file looked up by [`BenchConfig::discover`].
pub const CONFIG_FILENAME: &str = "sortbench.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub data: DataConfig,
    pub output: OutputConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Unsorted input; generated when missing
    pub file: PathBuf,
    #[serde(flatten)]
    pub spec: DatasetSpec,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(UNSORTED_DATA_FILENAME),
            spec: DatasetSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for the `<algorithm>_SortedData.txt` files
    pub directory: PathBuf,
    pub save_sorted: bool,
    /// Optional CSV export of per-algorithm timings
    pub csv: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            save_sorted: true,
            csv: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Timed runs per algorithm; more than one adds a statistics table
    pub runs: usize,
    /// Unrecorded warmup runs per algorithm in statistics mode
    pub warmup: usize,
    /// Seed for data generation, quick sort pivots and the repeated-run schedule
    pub seed: Option<u64>,
    pub pin: PinStrategy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            warmup: 1,
            seed: None,
            pin: PinStrategy::default(),
        }
    }
}

impl RunnerConfig {
    pub fn timing(&self) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs.max(1),
            warmup_iterations: self.warmup,
            pin_strategy: self.pin,
            seed: self.seed,
        }
    }
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Walk up from the current directory looking for `sortbench.toml`.
    pub fn discover() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load an explicit file, else a discovered one, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(Self::discover) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
