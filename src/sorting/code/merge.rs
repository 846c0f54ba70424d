/// Top-down merge sort allocating fresh halves at every level.
///
/// Splits at `len / 2`; on ties the element from the lower-index half is
/// taken first, so the sort is stable.
pub fn merge_sort<T: Ord + Copy>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let first = merge_sort(&data[..mid]);
    let second = merge_sort(&data[mid..]);

    merge(&first, &second)
}

fn merge<T: Ord + Copy>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        if second[j] < first[i] {
            merged.push(second[j]);
            j += 1;
        } else {
            merged.push(first[i]);
            i += 1;
        }
    }

    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);
    merged
}
