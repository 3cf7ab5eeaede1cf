use algoviz_core::SortStep;

/// Bottom-up merge sort, doubling the run width each pass and recording one
/// unhighlighted snapshot per completed merge of a pair of runs. The trace
/// is deliberately coarser than bubble sort's.
pub(crate) fn sort(values: &[i32]) -> Vec<SortStep> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut steps = vec![SortStep::plain(a.clone())];

    let mut width = 1;
    while width < n {
        let mut i = 0;
        while i < n {
            let mid = (i + width).min(n);
            let hi = (i + 2 * width).min(n);
            merge_runs(&mut a, i, mid, hi);
            steps.push(SortStep::plain(a.clone()));
            i += 2 * width;
        }
        width *= 2;
    }

    steps.push(SortStep::plain(a));
    steps
}

/// Stably merge the adjacent sorted runs `a[lo..mid]` and `a[mid..hi]`.
fn merge_runs(a: &mut [i32], lo: usize, mid: usize, hi: usize) {
    let mut merged = Vec::with_capacity(hi - lo);
    let (mut l, mut r) = (lo, mid);
    while l < mid && r < hi {
        if a[l] <= a[r] {
            merged.push(a[l]);
            l += 1;
        } else {
            merged.push(a[r]);
            r += 1;
        }
    }
    merged.extend_from_slice(&a[l..mid]);
    merged.extend_from_slice(&a[r..hi]);
    a[lo..hi].copy_from_slice(&merged);
}
