use algoviz_core::SortStep;

/// Bubble sort, recording one step per adjacent comparison and an extra
/// step after every swap. The quadratic step count is intentional — the
/// dense trace is the point of the visualization.
pub(crate) fn sort(values: &[i32]) -> Vec<SortStep> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut steps = vec![SortStep::plain(a.clone())];

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            steps.push(SortStep::new(a.clone(), vec![j, j + 1]));
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                steps.push(SortStep::new(a.clone(), vec![j, j + 1]));
            }
        }
    }

    steps.push(SortStep::plain(a));
    steps
}
