use rand::Rng;

/// Quick sort with a uniformly random pivot drawn from the thread-local RNG.
pub fn quick_sort(data: &[i32]) -> Vec<i32> {
    quick_sort_with_rng(data, &mut rand::rng())
}

/// Quick sort with a caller-supplied RNG, for reproducible pivot sequences.
///
/// Each segment is split into values below the pivot followed by values at
/// or above it, keeping their relative order and excluding only the element
/// at the chosen pivot index. Segments are processed from an explicit work
/// list, so recursion depth never grows with unlucky pivots.
pub fn quick_sort_with_rng<R: Rng + ?Sized>(data: &[i32], rng: &mut R) -> Vec<i32> {
    let mut output = data.to_vec();
    if output.len() <= 1 {
        return output;
    }

    let mut less = Vec::with_capacity(output.len());
    let mut greater_eq = Vec::with_capacity(output.len());
    let mut pending = vec![(0usize, output.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start <= 1 {
            continue;
        }

        let segment = &mut output[start..end];
        let pivot_index = rng.random_range(0..segment.len());
        let pivot = segment[pivot_index];

        less.clear();
        greater_eq.clear();
        for (i, &value) in segment.iter().enumerate() {
            if value < pivot {
                less.push(value);
            } else if i != pivot_index {
                greater_eq.push(value);
            }
        }

        let split = less.len();
        segment[..split].copy_from_slice(&less);
        segment[split] = pivot;
        segment[split + 1..].copy_from_slice(&greater_eq);

        pending.push((start, start + split));
        pending.push((start + split + 1, end));
    }

    output
}
