//! Dataset source and result sink.
//!
//! Datasets are stored as decimal integers, each followed by a single space,
//! in one flat list.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::sorting::SortAlgorithm;

/// Default file holding the unsorted input.
pub const UNSORTED_DATA_FILENAME: &str = "UnsortedData.txt";
/// Suffix appended to an algorithm's name for its sorted output file.
pub const SORTED_DATA_FILENAME_SUFFIX: &str = "_SortedData.txt";

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetSpec {
    pub count: usize,
    pub minimum: i32,
    pub maximum: i32,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            count: 10_000,
            minimum: 0,
            maximum: 1000,
        }
    }
}

impl DatasetSpec {
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.minimum > self.maximum {
            return Err(DatasetError::InvalidRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

/// Draw `spec.count` values uniformly from `[spec.minimum, spec.maximum]`.
pub fn generate<R: Rng + ?Sized>(spec: &DatasetSpec, rng: &mut R) -> Result<Vec<i32>, DatasetError> {
    spec.validate()?;
    Ok((0..spec.count)
        .map(|_| rng.random_range(spec.minimum..=spec.maximum))
        .collect())
}

pub fn write_dataset(path: &Path, data: &[i32]) -> Result<(), DatasetError> {
    let file = fs::File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for value in data {
        write!(writer, "{} ", value).map_err(|e| DatasetError::io(path, e))?;
    }
    writer.flush().map_err(|e| DatasetError::io(path, e))
}

pub fn read_dataset(path: &Path) -> Result<Vec<i32>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    parse_dataset(path, &content)
}

fn parse_dataset(path: &Path, content: &str) -> Result<Vec<i32>, DatasetError> {
    content
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|_| DatasetError::Parse {
                path: path.to_path_buf(),
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Generate and write a dataset to `path` unless the file already exists.
///
/// Returns `true` if a new dataset was written.
pub fn ensure_dataset<R: Rng + ?Sized>(
    path: &Path,
    spec: &DatasetSpec,
    rng: &mut R,
) -> Result<bool, DatasetError> {
    if path.exists() {
        return Ok(false);
    }

    tracing::info!(path = %path.display(), "No unsorted data file exists, generating new data");
    let data = generate(spec, rng)?;
    write_dataset(path, &data)?;
    tracing::info!(count = data.len(), "Unsorted data generated successfully");
    Ok(true)
}

/// `<dir>/<algorithm name>_SortedData.txt`
pub fn sorted_output_path(dir: &Path, algorithm: SortAlgorithm) -> PathBuf {
    dir.join(format!("{}{}", algorithm.name(), SORTED_DATA_FILENAME_SUFFIX))
}
