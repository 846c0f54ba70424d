//! Post-sort integrity checking.
//!
//! A [`Signature`] records how often each value in `[min, max]` occurs in a
//! dataset. The caller tabulates the unsorted data once and passes that
//! baseline to [`check`] / [`verify`] for every sorted result: a result is
//! accepted only if it is non-decreasing and a permutation of the baseline.

use crate::error::IntegrityError;
use crate::sorting::code::{min_max, range_len, MAX_COUNTING_RANGE};

/// Dense frequency table of a dataset, indexed by `value - min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    min: i32,
    counts: Vec<usize>,
    len: usize,
}

impl Signature {
    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        (i64::from(self.min) + self.counts.len() as i64 - 1) as i32
    }

    /// Number of buckets, `max - min + 1`.
    pub fn range_len(&self) -> usize {
        self.counts.len()
    }

    /// Number of elements tabulated. Always equals the sum of all counts.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occurrences of `value`; zero outside `[min, max]`.
    pub fn count_of(&self, value: i32) -> usize {
        let offset = i64::from(value) - i64::from(self.min);
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.counts.get(i).copied())
            .unwrap_or(0)
    }

    /// Distinct values with their counts, ascending.
    pub fn entries(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(move |(i, &count)| ((i64::from(self.min) + i as i64) as i32, count))
    }
}

/// Build the frequency signature of `data`.
///
/// Fails on empty input and on value ranges wider than
/// [`MAX_COUNTING_RANGE`] buckets.
pub fn tabulate(data: &[i32]) -> Result<Signature, IntegrityError> {
    let (min, max) = min_max(data.iter().copied()).ok_or(IntegrityError::EmptyInput)?;

    let range = range_len(min, max);
    if range > MAX_COUNTING_RANGE {
        return Err(IntegrityError::RangeTooLarge {
            range,
            limit: MAX_COUNTING_RANGE,
        });
    }

    Ok(Signature {
        min,
        counts: count_values(data, min, range as usize),
        len: data.len(),
    })
}

/// Bucket counts of `data`; every value must lie in `[min, min + range)`.
fn count_values(data: &[i32], min: i32, range: usize) -> Vec<usize> {
    let mut counts = vec![0usize; range];
    for &value in data {
        counts[(i64::from(value) - i64::from(min)) as usize] += 1;
    }
    counts
}

/// Check that `data` is sorted and has exactly the baseline's multiset.
///
/// Checks run in order: length, value range, ordering, per-value counts.
/// The first failing check is returned.
pub fn check(data: &[i32], baseline: &Signature) -> Result<(), IntegrityError> {
    if data.len() != baseline.len() {
        return Err(IntegrityError::LengthMismatch {
            expected: baseline.len(),
            actual: data.len(),
        });
    }

    // Range is compared before the count table is allocated.
    let (min, max) = min_max(data.iter().copied()).ok_or(IntegrityError::EmptyInput)?;
    if min != baseline.min() || max != baseline.max() {
        return Err(IntegrityError::RangeMismatch {
            expected_min: baseline.min(),
            expected_max: baseline.max(),
            actual_min: min,
            actual_max: max,
        });
    }

    if let Some(index) = data.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(IntegrityError::OrderViolation {
            index: index + 1,
            previous: data[index],
            current: data[index + 1],
        });
    }

    let counts = count_values(data, min, baseline.range_len());
    let mismatch = baseline
        .counts
        .iter()
        .zip(&counts)
        .position(|(expected, actual)| expected != actual);
    if let Some(i) = mismatch {
        return Err(IntegrityError::CountMismatch {
            value: (i64::from(baseline.min) + i as i64) as i32,
            expected: baseline.counts[i],
            actual: counts[i],
        });
    }

    Ok(())
}

/// [`check`] with the outcome logged.
pub fn check_logged(data: &[i32], baseline: &Signature) -> Result<(), IntegrityError> {
    tracing::info!("Checking sorted data...");
    let result = check(data, baseline);
    match &result {
        Ok(()) => tracing::info!("Data sort and integrity check successful"),
        Err(e) => tracing::error!(error = %e, "Data sort and integrity check failed"),
    }
    result
}

/// [`check`] with the outcome logged; returns whether it passed.
pub fn verify(data: &[i32], baseline: &Signature) -> bool {
    check_logged(data, baseline).is_ok()
}
