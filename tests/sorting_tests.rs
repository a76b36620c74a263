// Integration tests for the sorting emitters

use algotrace::algorithms::catalog::AlgorithmKind;
use algotrace::algorithms::trace;
use algotrace::snapshot::{StepKind, StepSequence};

const SORTS: [AlgorithmKind; 3] = [AlgorithmKind::Bubble, AlgorithmKind::Merge, AlgorithmKind::Quick];

fn record(kind: AlgorithmKind, input: &[i64]) -> StepSequence {
    trace(kind, input, None).expect("Tracing failed")
}

#[test]
fn test_every_sort_orders_the_example() {
    for kind in SORTS {
        let seq = record(kind, &[5, 2, 8, 1, 9]);

        assert_eq!(seq.first().array, vec![5, 2, 8, 1, 9], "{kind}");
        assert_eq!(seq.last().array, vec![1, 2, 5, 8, 9], "{kind}");
        assert_eq!(seq.last().kind, StepKind::Complete, "{kind}");
        assert_eq!(seq.last().sorted_region.len(), 5, "{kind}");
        assert_eq!(seq.input_size(), 5);
    }
}

#[test]
fn test_bubble_early_exit_on_sorted_input() {
    let seq = record(AlgorithmKind::Bubble, &[1, 2, 3, 4]);

    let last = seq.last();
    assert_eq!(last.comparisons, 3);
    assert_eq!(last.swaps, 0);

    let early = seq
        .iter()
        .find(|s| s.kind == StepKind::EarlyExit)
        .expect("No early exit step");
    assert_eq!(early.sorted_region.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    // start, three compares, early exit, complete
    assert_eq!(seq.len(), 6);
}

#[test]
fn test_bubble_counts_reverse_input() {
    let seq = record(AlgorithmKind::Bubble, &[4, 3, 2, 1]);

    let last = seq.last();
    assert_eq!(last.comparisons, 6);
    assert_eq!(last.swaps, 6);
    assert!(seq.iter().all(|s| s.kind != StepKind::EarlyExit));
}

#[test]
fn test_single_element_is_trivially_sorted() {
    for kind in SORTS {
        let seq = record(kind, &[42]);

        assert_eq!(seq.first().kind, StepKind::Start);
        assert_eq!(seq.last().kind, StepKind::Complete);
        assert_eq!(seq.last().array, vec![42]);
        assert_eq!(seq.last().comparisons, 0, "{kind}");
        assert_eq!(seq.last().swaps, 0, "{kind}");
    }
}

#[test]
fn test_duplicates_and_negatives() {
    for kind in SORTS {
        let seq = record(kind, &[3, -1, 3, 0, -1]);
        assert_eq!(seq.last().array, vec![-1, -1, 0, 3, 3], "{kind}");
    }
}

#[test]
fn test_swap_steps_highlight_two_indices() {
    for kind in [AlgorithmKind::Bubble, AlgorithmKind::Quick] {
        let seq = record(kind, &[5, 2, 8, 1, 9]);
        for step in seq.iter().filter(|s| s.kind == StepKind::Swap) {
            assert!(!step.swapped.is_empty(), "{kind}");
            assert!(step.swapped.iter().all(|&i| i < 5));
        }
    }
}

#[test]
fn test_merge_never_swaps() {
    let seq = record(AlgorithmKind::Merge, &[9, 7, 5, 3, 1]);
    assert!(seq.iter().all(|s| s.swaps == 0));
    assert!(seq.iter().any(|s| s.kind == StepKind::Divide));
    assert!(seq.iter().any(|s| s.kind == StepKind::Merge));
}

#[test]
fn test_quick_pivots_are_reproducible() {
    let pivots = |seq: &StepSequence| -> Vec<usize> {
        seq.iter()
            .filter(|s| s.kind == StepKind::Pivot)
            .filter_map(|s| s.pivot)
            .collect()
    };

    let a = record(AlgorithmKind::Quick, &[5, 2, 8, 1, 9]);
    let b = record(AlgorithmKind::Quick, &[5, 2, 8, 1, 9]);

    // last element of each partitioned range
    assert_eq!(pivots(&a)[0], 4);
    assert_eq!(pivots(&a), pivots(&b));
}

#[test]
fn test_quick_accumulates_placed_pivots() {
    let seq = record(AlgorithmKind::Quick, &[5, 2, 8, 1, 9]);

    let mut seen = 0;
    for step in seq.iter().filter(|s| s.kind == StepKind::PartitionComplete) {
        assert!(step.sorted_region.len() > seen);
        seen = step.sorted_region.len();
    }
    assert!(seen > 0);
}

#[test]
fn test_recording_is_deterministic() {
    for kind in SORTS {
        let a = record(kind, &[7, 3, 9, 3, 0, -4, 12]);
        let b = record(kind, &[7, 3, 9, 3, 0, -4, 12]);
        assert!(a.same_content(&b), "{kind}");
    }
}

#[test]
fn test_sequence_survives_json_replay() {
    let seq = record(AlgorithmKind::Quick, &[5, 2, 8, 1, 9]);
    let json = serde_json::to_string(&seq).expect("Serialization failed");
    let loaded: StepSequence = serde_json::from_str(&json).expect("Deserialization failed");
    assert!(seq.same_content(&loaded));
}

#[test]
fn test_tampered_replay_is_rejected() {
    let seq = record(AlgorithmKind::Bubble, &[3, 1, 2]);
    let mut value = serde_json::to_value(&seq).expect("Serialization failed");
    // unsort the final array
    value["steps"]
        .as_array_mut()
        .and_then(|steps| steps.last_mut())
        .expect("No steps")["array"] = serde_json::json!([3, 2, 1]);

    assert!(serde_json::from_value::<StepSequence>(value).is_err());
}
