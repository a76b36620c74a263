// Step snapshots recorded while an algorithm runs

pub mod highlight;
pub mod sequence;

pub use highlight::Highlight;
pub use sequence::StepSequence;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Start,
    Compare,
    Swap,
    Divide,
    Merge,
    Pivot,
    PartitionComplete,
    EliminateLeft,
    EliminateRight,
    EarlyExit,
    Found,
    NotFound,
    Complete,
}

impl StepKind {
    /// Terminal steps close a sequence; nothing may follow them
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Found | StepKind::NotFound | StepKind::Complete)
    }
}

/// Active window of a step, inclusive on both ends.
///
/// Signed because binary search may narrow to `high = -1`, and `low > high`
/// marks an exhausted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: i64,
    pub high: i64,
}

impl Bounds {
    pub fn new(low: i64, high: i64) -> Self {
        Bounds { low, high }
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    pub fn contains(&self, index: usize) -> bool {
        let index = index as i64;
        self.low <= index && index <= self.high
    }
}

/// Immutable snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,
    pub array: Vec<i64>,
    #[serde(default)]
    pub comparisons: u64,
    #[serde(default)]
    pub swaps: u64,
    #[serde(default)]
    pub elapsed_ms: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub comparing: BTreeSet<usize>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub swapped: BTreeSet<usize>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sorted_region: BTreeSet<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checking_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

impl Step {
    /// A step with no highlights and zeroed counters
    pub fn new(kind: StepKind, array: Vec<i64>) -> Self {
        Step {
            kind,
            array,
            comparisons: 0,
            swaps: 0,
            elapsed_ms: 0.0,
            message: String::new(),
            comparing: BTreeSet::new(),
            swapped: BTreeSet::new(),
            sorted_region: BTreeSet::new(),
            pivot: None,
            found_index: None,
            checking_index: None,
            mid: None,
            target: None,
            bounds: None,
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Field-for-field equality, ignoring the wall-time marker
    pub fn eq_ignoring_time(&self, other: &Step) -> bool {
        let mut this = self.clone();
        this.elapsed_ms = other.elapsed_ms;
        this == *other
    }

    /// Every index mentioned by any highlight set
    pub fn highlighted_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.comparing
            .iter()
            .chain(&self.swapped)
            .chain(&self.sorted_region)
            .copied()
            .chain(self.pivot)
            .chain(self.found_index)
            .chain(self.checking_index)
            .chain(self.mid)
    }
}
