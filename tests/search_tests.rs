// Integration tests for the search emitters

use algotrace::algorithms::catalog::AlgorithmKind;
use algotrace::algorithms::trace;
use algotrace::snapshot::{StepKind, StepSequence};

fn record(kind: AlgorithmKind, input: &[i64], target: i64) -> StepSequence {
    trace(kind, input, Some(target)).expect("Tracing failed")
}

fn compare_mids(seq: &StepSequence) -> Vec<usize> {
    seq.iter()
        .filter(|s| s.kind == StepKind::Compare)
        .filter_map(|s| s.mid)
        .collect()
}

#[test]
fn test_binary_finds_target() {
    let seq = record(AlgorithmKind::Binary, &[1, 3, 5, 7, 9], 7);

    assert_eq!(compare_mids(&seq), vec![2, 3]);
    assert_eq!(seq.last().kind, StepKind::Found);
    assert_eq!(seq.last().found_index, Some(3));
    assert_eq!(seq.last().comparisons, 2);
}

#[test]
fn test_binary_missing_target_crosses_bounds() {
    let seq = record(AlgorithmKind::Binary, &[1, 3, 5, 7, 9], 4);

    let last = seq.last();
    assert_eq!(last.kind, StepKind::NotFound);
    assert_eq!(last.found_index, None);
    let bounds = last.bounds.expect("No bounds on final step");
    assert!(bounds.low > bounds.high);
    assert!(bounds.is_empty());
    assert_eq!(compare_mids(&seq), vec![2, 0, 1]);
}

#[test]
fn test_binary_eliminations_shrink_window() {
    let seq = record(AlgorithmKind::Binary, &[2, 4, 6, 8, 10, 12, 14, 16], 15);

    let widths: Vec<i64> = seq
        .iter()
        .filter_map(|s| s.bounds)
        .map(|b| b.high - b.low)
        .collect();
    assert!(widths.windows(2).all(|w| w[1] <= w[0]));
    assert!(seq
        .iter()
        .any(|s| matches!(s.kind, StepKind::EliminateLeft | StepKind::EliminateRight)));
}

#[test]
fn test_binary_bounds_below_zero() {
    // target smaller than everything drives high to -1
    let seq = record(AlgorithmKind::Binary, &[10], 3);
    let bounds = seq.last().bounds.expect("No bounds on final step");
    assert_eq!((bounds.low, bounds.high), (0, -1));
}

#[test]
fn test_linear_reports_first_occurrence() {
    let seq = record(AlgorithmKind::Linear, &[4, 7, 1, 7], 7);

    assert_eq!(seq.last().kind, StepKind::Found);
    assert_eq!(seq.last().found_index, Some(1));
    assert_eq!(seq.last().comparisons, 2);
}

#[test]
fn test_linear_checks_every_index_when_absent() {
    let seq = record(AlgorithmKind::Linear, &[4, 7, 1], 5);

    let checked: Vec<usize> = seq.iter().filter_map(|s| s.checking_index).collect();
    assert_eq!(checked, vec![0, 1, 2]);
    assert_eq!(seq.last().kind, StepKind::NotFound);
    assert_eq!(seq.last().comparisons, 3);
}

#[test]
fn test_search_never_reorders_input() {
    for kind in [AlgorithmKind::Linear, AlgorithmKind::Binary] {
        let seq = record(kind, &[1, 3, 5, 7, 9], 9);
        assert!(seq.iter().all(|s| s.array == vec![1, 3, 5, 7, 9]), "{kind}");
        assert!(seq.iter().all(|s| s.swaps == 0), "{kind}");
        assert!(seq.iter().all(|s| s.target == Some(9)), "{kind}");
    }
}

#[test]
fn test_search_without_target_is_rejected() {
    for kind in [AlgorithmKind::Linear, AlgorithmKind::Binary] {
        let err = trace(kind, &[1, 2, 3], None).unwrap_err();
        assert!(err.is_invalid_input(), "{kind}");
    }
}
