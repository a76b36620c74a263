//! Sorting emitters
//!
//! - [`BubbleSort`]: adjacent swaps with early exit after a clean pass
//! - [`MergeSort`]: top-down split, stable merge
//! - [`QuickSort`]: Lomuto partition around the last element of each range
//!
//! All three start with a `start` step holding the untouched input and end
//! with a `complete` step whose sorted region covers every index.

use super::catalog::AlgorithmKind;
use super::errors::EngineError;
use super::recorder::StepRecorder;
use super::StepEmitter;
use crate::snapshot::StepKind;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

/// Pivot is always the last element of the range. Sorted and reverse-sorted
/// inputs therefore take O(n²) comparisons; replays stay reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl StepEmitter for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError> {
        let n = rec.len();
        rec.draft(StepKind::Start, format!("Starting Bubble Sort on {n} elements"))
            .record();

        for pass in 0..n.saturating_sub(1) {
            let settled = n - pass..n;
            let mut changed = false;

            for j in 0..n - 1 - pass {
                let (a, b) = (rec.value(j), rec.value(j + 1));
                let order = rec.compare(j, j + 1);
                rec.draft(StepKind::Compare, format!("Comparing {a} and {b}"))
                    .comparing([j, j + 1])
                    .sorted(settled.clone())
                    .record();

                if order == Ordering::Greater {
                    rec.swap(j, j + 1);
                    changed = true;
                    rec.draft(StepKind::Swap, format!("Swapped {a} and {b}"))
                        .swapped([j, j + 1])
                        .sorted(settled.clone())
                        .record();
                }
            }

            if !changed {
                rec.draft(
                    StepKind::EarlyExit,
                    format!("No swaps in pass {}: the array is sorted", pass + 1),
                )
                .sorted(0..n)
                .record();
                break;
            }
        }

        let message = format!(
            "Sorting complete! Made {} comparisons and {} swaps.",
            rec.comparisons(),
            rec.swaps()
        );
        rec.draft(StepKind::Complete, message).sorted(0..n).record();
        Ok(())
    }
}

impl StepEmitter for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError> {
        let n = rec.len();
        rec.draft(StepKind::Start, "Starting Merge Sort: divide, then merge")
            .bounds(0, n as i64 - 1)
            .record();

        if n > 0 {
            merge_sort_range(rec, 0, n - 1);
        }

        let message = format!(
            "Merge Sort complete! Made {} comparisons.",
            rec.comparisons()
        );
        rec.draft(StepKind::Complete, message).sorted(0..n).record();
        Ok(())
    }
}

fn merge_sort_range(rec: &mut StepRecorder, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = (low + high) / 2;
    rec.draft(
        StepKind::Divide,
        format!("Dividing range [{low}..{high}] at index {mid}"),
    )
    .bounds(low as i64, high as i64)
    .record();

    merge_sort_range(rec, low, mid);
    merge_sort_range(rec, mid + 1, high);
    merge(rec, low, mid, high);
}

/// Merge `[low..=mid]` and `[mid+1..=high]`.
///
/// After every placement the range is laid out as merged output, then what is
/// left of the left half, then what is left of the right half. The array stays
/// a permutation of the input, the left head sits right after the merged
/// output and the right head stays at `mid + 1 + j`.
fn merge(rec: &mut StepRecorder, low: usize, mid: usize, high: usize) {
    let left = rec.array()[low..=mid].to_vec();
    let right = rec.array()[mid + 1..=high].to_vec();
    let mut merged = Vec::with_capacity(high - low + 1);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let left_head = low + merged.len();
        let right_head = mid + 1 + j;
        rec.count_comparison();
        rec.draft(
            StepKind::Compare,
            format!("Comparing {} (left) with {} (right)", left[i], right[j]),
        )
        .comparing([left_head, right_head])
        .bounds(low as i64, high as i64)
        .record();

        // ties take the left element to stay stable
        let message = if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
            format!("Placed {} from the left half at index {left_head}", left[i - 1])
        } else {
            merged.push(right[j]);
            j += 1;
            format!("Placed {} from the right half at index {left_head}", right[j - 1])
        };

        let layout = merged.iter().chain(&left[i..]).chain(&right[j..]);
        for (offset, &value) in layout.enumerate() {
            rec.write(low + offset, value);
        }
        rec.draft(StepKind::Merge, message)
            .bounds(low as i64, high as i64)
            .record();
    }
}

impl StepEmitter for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError> {
        let n = rec.len();
        rec.draft(StepKind::Start, "Starting Quick Sort: partition around pivots")
            .bounds(0, n as i64 - 1)
            .record();

        let mut placed = BTreeSet::new();
        if n > 0 {
            quick_sort_range(rec, &mut placed, 0, n - 1);
        }

        let message = format!(
            "Quick Sort complete! Made {} comparisons and {} swaps.",
            rec.comparisons(),
            rec.swaps()
        );
        rec.draft(StepKind::Complete, message).sorted(0..n).record();
        Ok(())
    }
}

fn quick_sort_range(rec: &mut StepRecorder, placed: &mut BTreeSet<usize>, low: usize, high: usize) {
    match low.cmp(&high) {
        Ordering::Greater => {}
        Ordering::Equal => {
            placed.insert(low);
        }
        Ordering::Less => {
            let p = partition(rec, placed, low, high);
            if p > low {
                quick_sort_range(rec, placed, low, p - 1);
            }
            quick_sort_range(rec, placed, p + 1, high);
        }
    }
}

/// Lomuto partition; returns the pivot's final index
fn partition(rec: &mut StepRecorder, placed: &mut BTreeSet<usize>, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    let window = (low as i64, high as i64);

    rec.draft(
        StepKind::Pivot,
        format!("Selected pivot {pivot} at index {high}"),
    )
    .pivot(high)
    .bounds(window.0, window.1)
    .sorted(placed.iter().copied())
    .record();

    let mut store = low;
    for scan in low..high {
        let value = rec.value(scan);
        let order = rec.compare_with(scan, pivot);
        rec.draft(
            StepKind::Compare,
            format!("Comparing {value} with pivot {pivot}"),
        )
        .comparing([scan, high])
        .pivot(high)
        .bounds(window.0, window.1)
        .sorted(placed.iter().copied())
        .record();

        if order == Ordering::Less {
            let displaced = rec.value(store);
            rec.swap(store, scan);
            rec.draft(
                StepKind::Swap,
                format!("Swapped {value} and {displaced} (both sides of the boundary)"),
            )
            .swapped([store, scan])
            .pivot(high)
            .bounds(window.0, window.1)
            .sorted(placed.iter().copied())
            .record();
            store += 1;
        }
    }

    rec.swap(store, high);
    placed.insert(store);
    rec.draft(
        StepKind::PartitionComplete,
        format!("Placed pivot {pivot} in its final position at index {store}"),
    )
    .swapped([store, high])
    .bounds(window.0, window.1)
    .sorted(placed.iter().copied())
    .record();

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(emitter: &dyn StepEmitter, input: &[i64]) -> crate::snapshot::StepSequence {
        let mut rec = StepRecorder::new(emitter.kind(), input, None);
        emitter.emit(&mut rec).unwrap();
        rec.finish().unwrap()
    }

    #[test]
    fn test_bubble_reverse_has_no_early_exit() {
        let seq = run(&BubbleSort, &[4, 3, 2, 1]);
        assert!(seq.iter().all(|s| s.kind != StepKind::EarlyExit));
        assert_eq!(seq.last().comparisons, 6);
        assert_eq!(seq.last().swaps, 6);
    }

    #[test]
    fn test_bubble_single_element() {
        let seq = run(&BubbleSort, &[42]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.last().array, vec![42]);
    }

    #[test]
    fn test_merge_compare_highlights_heads() {
        let seq = run(&MergeSort, &[2, 1]);
        let compare = seq.iter().find(|s| s.kind == StepKind::Compare).unwrap();
        assert_eq!(compare.comparing, BTreeSet::from([0, 1]));
        assert_eq!(compare.array, vec![2, 1]);
        let placed = seq.iter().find(|s| s.kind == StepKind::Merge).unwrap();
        assert_eq!(placed.array, vec![1, 2]);
    }

    #[test]
    fn test_merge_tie_takes_left_element() {
        let seq = run(&MergeSort, &[1, 1]);
        let compare = seq.iter().find(|s| s.kind == StepKind::Compare).unwrap();
        assert_eq!(compare.comparing, BTreeSet::from([0, 1]));

        let placed = seq.iter().find(|s| s.kind == StepKind::Merge).unwrap();
        assert!(placed.message.contains("from the left half"), "{}", placed.message);
        assert_eq!(placed.array, vec![1, 1]);
        assert_eq!(seq.last().comparisons, 1);
    }

    #[test]
    fn test_quick_pivot_is_last_of_partition() {
        let seq = run(&QuickSort, &[3, 1, 2]);
        let first_pivot = seq.iter().find(|s| s.kind == StepKind::Pivot).unwrap();
        assert_eq!(first_pivot.pivot, Some(2));
        assert_eq!(first_pivot.array, vec![3, 1, 2]);
    }
}
