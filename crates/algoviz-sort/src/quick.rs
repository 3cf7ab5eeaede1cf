use algoviz_core::SortStep;

/// Quick sort with Lomuto partitioning, recording a highlighted snapshot on
/// every index swap and one more when each partition's pivot settles. The
/// left partition always recurses before the right.
pub(crate) fn sort(values: &[i32]) -> Vec<SortStep> {
    let mut a = values.to_vec();
    let mut steps = vec![SortStep::plain(a.clone())];
    let hi = a.len() - 1;
    quick(&mut a, 0, hi, &mut steps);
    steps.push(SortStep::plain(a));
    steps
}

fn quick(a: &mut [i32], lo: usize, hi: usize, steps: &mut Vec<SortStep>) {
    if lo >= hi {
        return;
    }
    let p = partition(a, lo, hi, steps);
    if p > lo {
        quick(a, lo, p - 1, steps);
    }
    quick(a, p + 1, hi, steps);
}

/// Lomuto partition of `a[lo..=hi]` around the pivot `a[hi]`.
///
/// `slot` is the index the next ≤-pivot element lands in; every swap into it
/// is recorded, as is the final swap that settles the pivot.
fn partition(a: &mut [i32], lo: usize, hi: usize, steps: &mut Vec<SortStep>) -> usize {
    let pivot = a[hi];
    let mut slot = lo;
    for j in lo..hi {
        if a[j] <= pivot {
            a.swap(slot, j);
            steps.push(SortStep::new(a.to_vec(), vec![slot, j]));
            slot += 1;
        }
    }
    a.swap(slot, hi);
    steps.push(SortStep::new(a.to_vec(), vec![slot, hi]));
    slot
}
