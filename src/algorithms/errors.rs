//! Error types for step generation
//!
//! This module defines the failures an execution can end with:
//!
//! - [`InputError`]: the request was malformed or out of bounds. Raised before
//!   any step exists, so callers never see a partial sequence.
//! - [`InvariantViolation`]: a defensive check on the recorded sequence failed.
//!   This is an emitter bug and aborts sequence construction.
//! - [`EngineError`]: the union of both, with a stable `kind()` for callers
//!   that report failures as structured data.

use super::catalog::AlgorithmKind;
use serde::Serialize;
use thiserror::Error;

/// Rejected execution request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The array held no elements
    #[error("Array cannot be empty: provide at least one integer")]
    Empty,

    /// More elements than the configured maximum
    #[error("Array too large: got {len} elements, the maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// An element could not be read as an integer
    #[error(
        "Element {position} ({value}) is not an integer: the array must hold integers only, e.g. \"5,2,8,1,9\""
    )]
    NotAnInteger { position: usize, value: String },

    /// Search requested without a value to look for
    #[error("A target value is required for {algorithm}")]
    MissingTarget { algorithm: AlgorithmKind },

    /// Target present but not an integer
    #[error("Target {value} is not an integer")]
    InvalidTarget { value: String },

    /// Algorithm name not in the catalog
    #[error("Unknown algorithm '{name}': available algorithms are {available}")]
    UnknownAlgorithm { name: String, available: String },

    /// Request body could not be decoded at all
    #[error("Malformed request: {message}")]
    Malformed { message: String },
}

impl InputError {
    /// Short headline used as the `error` field of a failure report
    pub fn title(&self) -> &'static str {
        match self {
            InputError::Empty => "Array cannot be empty",
            InputError::TooLong { .. } => "Array too large",
            InputError::NotAnInteger { .. } => "Invalid array format",
            InputError::MissingTarget { .. } => "Target value required for searching algorithms",
            InputError::InvalidTarget { .. } => "Invalid target value",
            InputError::UnknownAlgorithm { .. } => "Unknown algorithm",
            InputError::Malformed { .. } => "Invalid request body",
        }
    }
}

/// Broken guarantee detected while sealing a step sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("sequence has no steps")]
    EmptySequence,

    #[error("first step does not hold the untouched input")]
    FirstStepMismatch,

    #[error("step {step} has {len} elements, expected {expected}")]
    LengthDrift {
        step: usize,
        len: usize,
        expected: usize,
    },

    #[error("{counter} decreased from {before} to {after} at step {step}")]
    CounterDecreased {
        step: usize,
        counter: &'static str,
        before: u64,
        after: u64,
    },

    #[error("step {step} highlights index {index}, outside 0..{len}")]
    HighlightOutOfBounds { step: usize, index: usize, len: usize },

    #[error("step {step} is not a permutation of the input")]
    NotAPermutation { step: usize },

    #[error("step {step} is terminal but is not the last step")]
    EarlyTerminal { step: usize },

    #[error("last step is not terminal")]
    MissingTerminal,

    #[error("final array is not sorted ascending")]
    Unsorted,

    #[error("final sorted region covers {covered} of {len} indices")]
    IncompleteSortedRegion { covered: usize, len: usize },

    #[error("search steps do not carry a target")]
    MissingTarget,

    #[error("found index {index} does not hold target {target}")]
    WrongFoundIndex { index: usize, target: i64 },

    #[error("found index {index} is not the first occurrence of {target}")]
    NotFirstOccurrence { index: usize, target: i64 },

    #[error("search ended without a result although {target} is at index {index}")]
    MissedTarget { index: usize, target: i64 },
}

/// Failure of one execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("algorithm invariant violated: {0}")]
    AlgorithmInvariant(#[from] InvariantViolation),
}

/// `{ error, details }` envelope returned to callers on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub error: String,
    pub details: String,
}

impl EngineError {
    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidInput(_) => "invalid_input",
            EngineError::AlgorithmInvariant(_) => "algorithm_invariant",
        }
    }

    /// Message safe to show to a user.
    ///
    /// Invariant violations are internal; their detail stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::InvalidInput(e) => e.to_string(),
            EngineError::AlgorithmInvariant(_) => {
                "An unexpected error occurred while running the algorithm".to_string()
            }
        }
    }

    pub fn report(&self) -> ErrorReport {
        let error = match self {
            EngineError::InvalidInput(e) => e.title().to_string(),
            EngineError::AlgorithmInvariant(_) => "Unexpected failure".to_string(),
        };
        ErrorReport {
            kind: self.kind(),
            error,
            details: self.user_message(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_report_hides_detail() {
        let err = EngineError::from(InvariantViolation::CounterDecreased {
            step: 4,
            counter: "swaps",
            before: 3,
            after: 2,
        });
        let report = err.report();
        assert_eq!(report.kind, "algorithm_invariant");
        assert!(!report.details.contains("swaps"));
        assert!(err.to_string().contains("swaps decreased from 3 to 2"));
    }

    #[test]
    fn test_too_long_message_names_limit() {
        let err = EngineError::from(InputError::TooLong { len: 51, max: 50 });
        assert!(err.is_invalid_input());
        assert_eq!(err.report().error, "Array too large");
        assert!(err.user_message().contains("51"));
        assert!(err.user_message().contains("50"));
    }
}
