/// Pass and swap counts from one bubble sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleStats {
    pub passes: usize,
    pub swaps: usize,
}

pub fn bubble_sort<T: Ord + Copy>(data: &[T]) -> Vec<T> {
    bubble_sort_with_stats(data).0
}

/// Bubble sort that also reports how much work it did.
///
/// Stops after the first pass without a swap.
pub fn bubble_sort_with_stats<T: Ord + Copy>(data: &[T]) -> (Vec<T>, BubbleStats) {
    let mut output = data.to_vec();
    let mut stats = BubbleStats::default();
    let len = output.len();

    for pass in 0..len.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;

        for j in 0..len - pass - 1 {
            if output[j] > output[j + 1] {
                output.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    (output, stats)
}
