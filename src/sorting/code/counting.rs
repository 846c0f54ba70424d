use crate::error::SortError;

/// Largest count array counting sort will allocate.
pub const MAX_COUNTING_RANGE: u64 = 1 << 24;

/// Stable counting sort.
///
/// Only practical when `max - min` is small relative to the input length.
/// Fails on empty input and on ranges wider than [`MAX_COUNTING_RANGE`].
pub fn counting_sort(data: &[i32]) -> Result<Vec<i32>, SortError> {
    counting_sort_by_key(data, |&value| value)
}

/// Counting sort over an integer key, placing records from last to first so
/// that records with equal keys keep their input order.
pub(crate) fn counting_sort_by_key<T, F>(data: &[T], key: F) -> Result<Vec<T>, SortError>
where
    T: Copy,
    F: Fn(&T) -> i32,
{
    let (min, max) = min_max(data.iter().map(&key)).ok_or(SortError::EmptyInput {
        algorithm: "counting sort",
    })?;

    let range = range_len(min, max);
    if range > MAX_COUNTING_RANGE {
        return Err(SortError::RangeTooLarge {
            range,
            limit: MAX_COUNTING_RANGE,
        });
    }

    let mut counts = vec![0usize; range as usize];
    for item in data {
        counts[bucket(key(item), min)] += 1;
    }

    // Prefix sums: counts[k] becomes one past the last slot for bucket k.
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; data.len()];
    for item in data.iter().rev() {
        let slot = &mut counts[bucket(key(item), min)];
        *slot -= 1;
        output[*slot] = Some(*item);
    }

    // Every slot is written exactly once by the placement pass.
    Ok(output.into_iter().flatten().collect())
}

#[inline]
fn bucket(value: i32, min: i32) -> usize {
    (i64::from(value) - i64::from(min)) as usize
}

/// Number of buckets in `[min, max]`.
#[inline]
pub(crate) fn range_len(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1) as u64
}

pub(crate) fn min_max(mut values: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
