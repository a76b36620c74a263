//! Step recorder shared by every emitter
//!
//! Emitters never assemble [`Step`]s by hand. They mutate the recorder's
//! working array through [`StepRecorder::swap`] and [`StepRecorder::write`],
//! count work through the `compare*` methods, and describe each snapshot with
//! a [`StepDraft`]:
//!
//! ```ignore
//! rec.draft(StepKind::Compare, "Comparing 5 and 2")
//!     .comparing([j, j + 1])
//!     .record();
//! ```
//!
//! The draft copies the current array and counters at creation, so a step
//! always reflects the state at the moment it was drafted.

use super::catalog::AlgorithmKind;
use super::errors::InvariantViolation;
use crate::snapshot::{Bounds, Step, StepKind, StepSequence};
use std::cmp::Ordering;
use std::time::Instant;

/// Working state of one execution
#[derive(Debug)]
pub struct StepRecorder {
    algorithm: AlgorithmKind,
    input: Vec<i64>,
    array: Vec<i64>,
    target: Option<i64>,
    comparisons: u64,
    swaps: u64,
    started: Instant,
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new(algorithm: AlgorithmKind, input: &[i64], target: Option<i64>) -> Self {
        StepRecorder {
            algorithm,
            input: input.to_vec(),
            array: input.to_vec(),
            target,
            comparisons: 0,
            swaps: 0,
            started: Instant::now(),
            steps: Vec::new(),
        }
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> i64 {
        self.array[index]
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Compare two elements of the working array, counting one comparison
    pub fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.comparisons += 1;
        self.array[a].cmp(&self.array[b])
    }

    /// Compare an element against an outside value (pivot, target)
    pub fn compare_with(&mut self, index: usize, value: i64) -> Ordering {
        self.comparisons += 1;
        self.array[index].cmp(&value)
    }

    /// Count a comparison made on values the emitter holds itself
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Exchange two elements, counting one swap
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
    }

    /// Overwrite a slot without touching the counters
    pub fn write(&mut self, index: usize, value: i64) {
        self.array[index] = value;
    }

    /// Start describing a step taken at the current state
    pub fn draft(&mut self, kind: StepKind, message: impl Into<String>) -> StepDraft<'_> {
        let mut step = Step::new(kind, self.array.clone());
        step.comparisons = self.comparisons;
        step.swaps = self.swaps;
        step.elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        step.message = message.into();
        step.target = self.target;
        StepDraft {
            recorder: self,
            step,
        }
    }

    /// Seal the recorded steps into a validated sequence
    pub fn finish(self) -> Result<StepSequence, InvariantViolation> {
        match self.steps.first() {
            Some(first) if first.array != self.input => {
                return Err(InvariantViolation::FirstStepMismatch);
            }
            _ => {}
        }
        StepSequence::new(self.algorithm, self.steps)
    }
}

/// One step under construction; nothing is recorded until [`StepDraft::record`]
#[must_use = "a draft is discarded unless `record` is called"]
pub struct StepDraft<'a> {
    recorder: &'a mut StepRecorder,
    step: Step,
}

impl StepDraft<'_> {
    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.step.comparing.extend(indices);
        self
    }

    pub fn swapped(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.step.swapped.extend(indices);
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.step.sorted_region.extend(indices);
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.step.pivot = Some(index);
        self
    }

    pub fn found(mut self, index: usize) -> Self {
        self.step.found_index = Some(index);
        self
    }

    pub fn checking(mut self, index: usize) -> Self {
        self.step.checking_index = Some(index);
        self
    }

    pub fn mid(mut self, index: usize) -> Self {
        self.step.mid = Some(index);
        self
    }

    pub fn bounds(mut self, low: i64, high: i64) -> Self {
        self.step.bounds = Some(Bounds::new(low, high));
        self
    }

    pub fn record(self) {
        self.recorder.steps.push(self.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_snapshots_current_state() {
        let mut rec = StepRecorder::new(AlgorithmKind::Bubble, &[3, 1], None);
        rec.draft(StepKind::Start, "start").record();
        assert_eq!(rec.compare(0, 1), Ordering::Greater);
        rec.swap(0, 1);
        rec.draft(StepKind::Swap, "swap").swapped([0, 1]).record();
        rec.draft(StepKind::Complete, "done").sorted(0..2).record();

        let seq = rec.finish().unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.first().array, vec![3, 1]);
        assert_eq!(seq.get(1).unwrap().array, vec![1, 3]);
        assert_eq!(seq.last().comparisons, 1);
        assert_eq!(seq.last().swaps, 1);
    }

    #[test]
    fn test_finish_rejects_altered_first_step() {
        let mut rec = StepRecorder::new(AlgorithmKind::Bubble, &[2, 1], None);
        rec.swap(0, 1);
        rec.draft(StepKind::Complete, "done").sorted(0..2).record();
        assert_eq!(rec.finish(), Err(InvariantViolation::FirstStepMismatch));
    }
}
