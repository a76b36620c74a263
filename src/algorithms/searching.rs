//! Searching emitters
//!
//! Both emitters refuse to run without a target: the check happens before the
//! first step is drafted, so a rejected run leaves nothing behind.

use super::catalog::AlgorithmKind;
use super::errors::{EngineError, InputError};
use super::recorder::StepRecorder;
use super::StepEmitter;
use crate::snapshot::StepKind;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

/// Expects sorted input; the request layer is responsible for that.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

fn require_target(rec: &StepRecorder) -> Result<i64, EngineError> {
    rec.target().ok_or_else(|| {
        InputError::MissingTarget {
            algorithm: rec.algorithm(),
        }
        .into()
    })
}

impl StepEmitter for LinearSearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Linear
    }

    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError> {
        let target = require_target(rec)?;
        rec.draft(StepKind::Start, format!("Starting linear search for {target}"))
            .record();

        for i in 0..rec.len() {
            let value = rec.value(i);
            let order = rec.compare_with(i, target);
            rec.draft(StepKind::Compare, format!("Checking arr[{i}] = {value}"))
                .checking(i)
                .record();

            if order == Ordering::Equal {
                rec.draft(StepKind::Found, format!("Found {target} at index {i}!"))
                    .found(i)
                    .record();
                return Ok(());
            }
        }

        rec.draft(StepKind::NotFound, format!("{target} not found in array"))
            .record();
        Ok(())
    }
}

impl StepEmitter for BinarySearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Binary
    }

    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError> {
        let target = require_target(rec)?;
        let mut low: i64 = 0;
        let mut high: i64 = rec.len() as i64 - 1;

        rec.draft(
            StepKind::Start,
            format!("Starting binary search for {target} in sorted array"),
        )
        .bounds(low, high)
        .record();

        while low <= high {
            // both ends are non-negative here, so this is floor division
            let mid = ((low + high) / 2) as usize;
            let value = rec.value(mid);
            let order = rec.compare_with(mid, target);
            rec.draft(
                StepKind::Compare,
                format!("Checking middle element arr[{mid}] = {value}"),
            )
            .mid(mid)
            .checking(mid)
            .bounds(low, high)
            .record();

            match order {
                Ordering::Equal => {
                    rec.draft(StepKind::Found, format!("Found {target} at index {mid}!"))
                        .found(mid)
                        .bounds(low, high)
                        .record();
                    return Ok(());
                }
                Ordering::Less => {
                    low = mid as i64 + 1;
                    rec.draft(
                        StepKind::EliminateLeft,
                        format!("{value} < {target}, searching right half"),
                    )
                    .bounds(low, high)
                    .record();
                }
                Ordering::Greater => {
                    high = mid as i64 - 1;
                    rec.draft(
                        StepKind::EliminateRight,
                        format!("{value} > {target}, searching left half"),
                    )
                    .bounds(low, high)
                    .record();
                }
            }
        }

        rec.draft(StepKind::NotFound, format!("{target} not found in array"))
            .bounds(low, high)
            .record();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_records_nothing() {
        let mut rec = StepRecorder::new(AlgorithmKind::Linear, &[1, 2, 3], None);
        let err = LinearSearch.emit(&mut rec).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(rec.step_count(), 0);

        let mut rec = StepRecorder::new(AlgorithmKind::Binary, &[1, 2, 3], None);
        assert!(BinarySearch.emit(&mut rec).is_err());
        assert_eq!(rec.step_count(), 0);
    }

    #[test]
    fn test_linear_stops_at_first_match() {
        let mut rec = StepRecorder::new(AlgorithmKind::Linear, &[4, 7, 7], Some(7));
        LinearSearch.emit(&mut rec).unwrap();
        let seq = rec.finish().unwrap();
        assert_eq!(seq.last().found_index, Some(1));
        assert_eq!(seq.last().comparisons, 2);
    }

    #[test]
    fn test_binary_single_element_miss() {
        let mut rec = StepRecorder::new(AlgorithmKind::Binary, &[5], Some(9));
        BinarySearch.emit(&mut rec).unwrap();
        let seq = rec.finish().unwrap();
        let bounds = seq.last().bounds.unwrap();
        assert!(bounds.is_empty());
        assert_eq!(seq.last().found_index, None);
    }
}
