/// Stable insertion sort over a copy of the input.
pub fn insertion_sort<T: Ord + Copy>(data: &[T]) -> Vec<T> {
    let mut output = data.to_vec();

    for i in 1..output.len() {
        let held = output[i];
        let mut j = i;
        while j > 0 && output[j - 1] > held {
            output[j] = output[j - 1];
            j -= 1;
        }
        output[j] = held;
    }

    output
}
