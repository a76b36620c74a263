//! Algorithm catalog
//!
//! [`AlgorithmKind`] names every algorithm the engine can trace. Each kind
//! carries static [`AlgorithmInfo`] (category, complexity, stability) that the
//! front end shows next to the replay and that `algotrace list` prints.

use super::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every traceable algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bubble,
    Merge,
    Quick,
    Linear,
    Binary,
}

/// Broad family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
}

/// Static description of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub kind: AlgorithmKind,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
}

impl AlgorithmInfo {
    /// One-line complexity summary, e.g. `Best: O(n), Avg: O(n²), Worst: O(n²)`
    pub fn complexity_summary(&self) -> String {
        format!(
            "Best: {}, Avg: {}, Worst: {}",
            self.time_best, self.time_average, self.time_worst
        )
    }
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Merge,
        AlgorithmKind::Quick,
        AlgorithmKind::Linear,
        AlgorithmKind::Binary,
    ];

    /// Identifier used in requests and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Linear => "linear",
            AlgorithmKind::Binary => "binary",
        }
    }

    pub fn category(self) -> Category {
        self.info().category
    }

    pub fn is_search(self) -> bool {
        self.category() == Category::Searching
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            AlgorithmKind::Bubble => &BUBBLE_INFO,
            AlgorithmKind::Merge => &MERGE_INFO,
            AlgorithmKind::Quick => &QUICK_INFO,
            AlgorithmKind::Linear => &LINEAR_INFO,
            AlgorithmKind::Binary => &BINARY_INFO,
        }
    }

    /// Comma-separated list of identifiers, for error messages
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for AlgorithmKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| InputError::UnknownAlgorithm {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

static BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Bubble,
    name: "Bubble Sort",
    category: Category::Sorting,
    description: "Repeatedly swaps adjacent out-of-order elements; stops early after a pass without swaps.",
    time_best: "O(n)",
    time_average: "O(n²)",
    time_worst: "O(n²)",
    space: "O(1)",
    stable: true,
};

static MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Merge,
    name: "Merge Sort",
    category: Category::Sorting,
    description: "Splits the array in halves, sorts each recursively and merges the sorted halves.",
    time_best: "O(n log n)",
    time_average: "O(n log n)",
    time_worst: "O(n log n)",
    space: "O(n)",
    stable: true,
};

static QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Quick,
    name: "Quick Sort",
    category: Category::Sorting,
    description: "Partitions around the last element of each range, then sorts both sides.",
    time_best: "O(n log n)",
    time_average: "O(n log n)",
    time_worst: "O(n²)",
    space: "O(log n)",
    stable: false,
};

static LINEAR_INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Linear,
    name: "Linear Search",
    category: Category::Searching,
    description: "Checks every element from left to right until the target turns up.",
    time_best: "O(1)",
    time_average: "O(n)",
    time_worst: "O(n)",
    space: "O(1)",
    stable: false,
};

static BINARY_INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Binary,
    name: "Binary Search",
    category: Category::Searching,
    description: "Halves the search window of a sorted array around its middle element.",
    time_best: "O(1)",
    time_average: "O(log n)",
    time_worst: "O(log n)",
    space: "O(1)",
    stable: false,
};
