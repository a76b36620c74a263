//! Instrumented algorithms
//!
//! This module turns an imperative algorithm run into a sealed
//! [`StepSequence`]:
//! - [`request`]: request decoding and validation
//! - [`recorder`]: the working state every emitter drives
//! - [`sorting`], [`searching`]: one [`StepEmitter`] per algorithm
//! - [`catalog`]: algorithm names and complexity metadata
//! - [`errors`]: input and invariant failures
//!
//! # Execution Model
//!
//! An emitter runs to completion before anything sees its output. Each step is
//! pushed into the recorder's buffer as it happens; the finished buffer is
//! validated and handed out whole. A failed run yields an error and no steps.

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod recorder;
pub mod request;
pub mod searching;
pub mod sorting;

use crate::snapshot::StepSequence;
use catalog::AlgorithmKind;
use errors::EngineError;
use recorder::StepRecorder;
use request::{EngineConfig, ValidatedInput};
use tracing::{debug, error};

/// Algorithm-specific step producer
pub trait StepEmitter {
    fn kind(&self) -> AlgorithmKind;

    /// Run the algorithm against the recorder's array, drafting every step.
    ///
    /// Must be deterministic: the same input always records the same steps.
    fn emit(&self, rec: &mut StepRecorder) -> Result<(), EngineError>;
}

/// The emitter registered for `kind`
pub fn emitter_for(kind: AlgorithmKind) -> &'static dyn StepEmitter {
    match kind {
        AlgorithmKind::Bubble => &sorting::BubbleSort,
        AlgorithmKind::Merge => &sorting::MergeSort,
        AlgorithmKind::Quick => &sorting::QuickSort,
        AlgorithmKind::Linear => &searching::LinearSearch,
        AlgorithmKind::Binary => &searching::BinarySearch,
    }
}

/// Produce the step sequence for validated input
#[tracing::instrument(skip_all, fields(algorithm = input.kind().as_str(), len = input.array().len()))]
pub fn run(input: &ValidatedInput) -> Result<StepSequence, EngineError> {
    let emitter = emitter_for(input.kind());
    let mut rec = StepRecorder::new(input.kind(), input.array(), input.target());
    emitter.emit(&mut rec)?;

    let sequence = rec.finish().map_err(|violation| {
        error!(%violation, "emitter produced an invalid step sequence");
        EngineError::from(violation)
    })?;

    let last = sequence.last();
    debug!(
        steps = sequence.len(),
        comparisons = last.comparisons,
        swaps = last.swaps,
        "step sequence recorded"
    );
    Ok(sequence)
}

/// Validate typed input with the default limits, then run it
pub fn trace(
    kind: AlgorithmKind,
    array: &[i64],
    target: Option<i64>,
) -> Result<StepSequence, EngineError> {
    let input = ValidatedInput::new(kind, array.to_vec(), target, &EngineConfig::default())?;
    run(&input)
}
