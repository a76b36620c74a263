//! Sealed, validated step sequences
//!
//! A [`StepSequence`] can only be built through [`StepSequence::new`], which
//! runs every structural check before handing the buffer out. Sequences read
//! back from their wire form go through the same checks, so a loaded replay
//! is as trustworthy as a freshly recorded one.

use super::{Step, StepKind};
use crate::algorithms::catalog::{AlgorithmKind, Category};
use crate::algorithms::errors::InvariantViolation;
use serde::{Deserialize, Serialize};

/// Ordered, immutable, non-empty list of steps for one execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireSequence")]
pub struct StepSequence {
    algorithm: AlgorithmKind,
    input_size: usize,
    steps: Vec<Step>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSequence {
    algorithm: AlgorithmKind,
    input_size: usize,
    steps: Vec<Step>,
}

impl TryFrom<WireSequence> for StepSequence {
    type Error = InvariantViolation;

    fn try_from(wire: WireSequence) -> Result<Self, Self::Error> {
        let sequence = StepSequence::new(wire.algorithm, wire.steps)?;
        if sequence.input_size != wire.input_size {
            return Err(InvariantViolation::LengthDrift {
                step: 0,
                len: sequence.input_size,
                expected: wire.input_size,
            });
        }
        Ok(sequence)
    }
}

impl StepSequence {
    /// Seal `steps` after checking every invariant
    pub fn new(algorithm: AlgorithmKind, steps: Vec<Step>) -> Result<Self, InvariantViolation> {
        let first = steps.first().ok_or(InvariantViolation::EmptySequence)?;
        let input_size = first.len();

        check_structure(&steps, input_size)?;
        match algorithm.category() {
            Category::Sorting => check_sorted(&steps)?,
            Category::Searching => check_search(algorithm, &steps)?,
        }

        Ok(StepSequence {
            algorithm,
            input_size,
            steps,
        })
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Length of the array every step carries
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Same steps field for field, wall-time markers excluded
    pub fn same_content(&self, other: &StepSequence) -> bool {
        self.algorithm == other.algorithm
            && self.steps.len() == other.steps.len()
            && self
                .steps
                .iter()
                .zip(&other.steps)
                .all(|(a, b)| a.eq_ignoring_time(b))
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Checks shared by every algorithm
fn check_structure(steps: &[Step], input_size: usize) -> Result<(), InvariantViolation> {
    let last = steps.len() - 1;
    let mut previous: Option<&Step> = None;

    for (i, step) in steps.iter().enumerate() {
        if step.len() != input_size {
            return Err(InvariantViolation::LengthDrift {
                step: i,
                len: step.len(),
                expected: input_size,
            });
        }

        if let Some(index) = step.highlighted_indices().find(|&idx| idx >= input_size) {
            return Err(InvariantViolation::HighlightOutOfBounds {
                step: i,
                index,
                len: input_size,
            });
        }

        if let Some(prev) = previous {
            if step.comparisons < prev.comparisons {
                return Err(InvariantViolation::CounterDecreased {
                    step: i,
                    counter: "comparisons",
                    before: prev.comparisons,
                    after: step.comparisons,
                });
            }
            if step.swaps < prev.swaps {
                return Err(InvariantViolation::CounterDecreased {
                    step: i,
                    counter: "swaps",
                    before: prev.swaps,
                    after: step.swaps,
                });
            }
        }

        if step.kind.is_terminal() && i != last {
            return Err(InvariantViolation::EarlyTerminal { step: i });
        }
        previous = Some(step);
    }

    if !steps[last].kind.is_terminal() {
        return Err(InvariantViolation::MissingTerminal);
    }
    Ok(())
}

/// Sorting steps only ever rearrange the input, and end fully sorted
fn check_sorted(steps: &[Step]) -> Result<(), InvariantViolation> {
    let mut reference = steps[0].array.clone();
    reference.sort_unstable();

    for (i, step) in steps.iter().enumerate().skip(1) {
        let mut values = step.array.clone();
        values.sort_unstable();
        if values != reference {
            return Err(InvariantViolation::NotAPermutation { step: i });
        }
    }

    let last = &steps[steps.len() - 1];
    if last.array.windows(2).any(|w| w[0] > w[1]) {
        return Err(InvariantViolation::Unsorted);
    }
    if last.sorted_region.len() != last.len() {
        return Err(InvariantViolation::IncompleteSortedRegion {
            covered: last.sorted_region.len(),
            len: last.len(),
        });
    }
    Ok(())
}

/// The search result on the last step must match the data
fn check_search(algorithm: AlgorithmKind, steps: &[Step]) -> Result<(), InvariantViolation> {
    let last = &steps[steps.len() - 1];
    let target = last.target.ok_or(InvariantViolation::MissingTarget)?;
    let array = &last.array;

    match last.found_index {
        Some(index) => {
            if array.get(index) != Some(&target) {
                return Err(InvariantViolation::WrongFoundIndex { index, target });
            }
            if algorithm == AlgorithmKind::Linear && array[..index].contains(&target) {
                return Err(InvariantViolation::NotFirstOccurrence { index, target });
            }
        }
        None => {
            // binary search only promises a result on sorted data
            let searchable = algorithm == AlgorithmKind::Linear
                || array.windows(2).all(|w| w[0] <= w[1]);
            if let Some(index) = array.iter().position(|&v| v == target) {
                if searchable {
                    return Err(InvariantViolation::MissedTarget { index, target });
                }
            }
        }
    }

    if last.kind == StepKind::Found && last.found_index.is_none() {
        return Err(InvariantViolation::MissingTerminal);
    }
    Ok(())
}
