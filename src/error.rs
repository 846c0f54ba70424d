//! Error types for sorting, integrity checking, dataset I/O and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::sorting::SortAlgorithm;

/// Failures raised by a sorting algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Counting sort needs at least one element to find min/max.
    #[error("cannot sort an empty dataset with {algorithm}")]
    EmptyInput { algorithm: &'static str },

    /// The value range would need an unreasonably large count array.
    #[error("value range of {range} buckets exceeds the limit of {limit}")]
    RangeTooLarge { range: u64, limit: u64 },
}

/// A sorted dataset that does not match its baseline signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("cannot tabulate an empty dataset")]
    EmptyInput,

    #[error("dataset holds {actual} elements, baseline holds {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A frequency table over this range would be too large to allocate.
    #[error("value range of {range} buckets exceeds the limit of {limit}")]
    RangeTooLarge { range: u64, limit: u64 },

    #[error(
        "value range [{actual_min}, {actual_max}] differs from baseline [{expected_min}, {expected_max}]"
    )]
    RangeMismatch {
        expected_min: i32,
        expected_max: i32,
        actual_min: i32,
        actual_max: i32,
    },

    #[error("ordering violated at index {index}: {previous} > {current}")]
    OrderViolation {
        index: usize,
        previous: i32,
        current: i32,
    },

    #[error("value {value} occurs {actual} times, baseline has {expected}")]
    CountMismatch {
        value: i32,
        expected: usize,
        actual: usize,
    },
}

/// Failures reading, writing or generating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: token {position} ({token:?}) is not an integer")]
    Parse {
        path: PathBuf,
        position: usize,
        token: String,
    },

    #[error("dataset minimum {minimum} is greater than maximum {maximum}")]
    InvalidRange { minimum: i32, maximum: i32 },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures loading `sortbench.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown sorting algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Top-level error for a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("data sort and integrity check failed for {algorithm}: {source}")]
    Integrity {
        algorithm: SortAlgorithm,
        #[source]
        source: IntegrityError,
    },

    #[error("baseline tabulation failed: {0}")]
    Baseline(#[source] IntegrityError),

    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
