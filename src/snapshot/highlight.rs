//! Highlight categories and their priority
//!
//! A step's highlight sets may overlap; a renderer that can show one visual
//! state per index picks the highest-priority category. The priority is the
//! declaration order of [`Highlight`] and is defined here only.

use super::Step;
use rustc_hash::FxHashMap;

/// Highlight category, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Highlight {
    Sorted,
    Comparing,
    Swapped,
    Pivot,
    Found,
    Checking,
    Mid,
}

impl Highlight {
    pub const PRIORITY: [Highlight; 7] = [
        Highlight::Sorted,
        Highlight::Comparing,
        Highlight::Swapped,
        Highlight::Pivot,
        Highlight::Found,
        Highlight::Checking,
        Highlight::Mid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Highlight::Sorted => "sorted",
            Highlight::Comparing => "comparing",
            Highlight::Swapped => "swapped",
            Highlight::Pivot => "pivot",
            Highlight::Found => "found",
            Highlight::Checking => "checking",
            Highlight::Mid => "mid",
        }
    }
}

impl Step {
    /// Whether `index` belongs to the given highlight set
    pub fn has_highlight(&self, highlight: Highlight, index: usize) -> bool {
        match highlight {
            Highlight::Sorted => self.sorted_region.contains(&index),
            Highlight::Comparing => self.comparing.contains(&index),
            Highlight::Swapped => self.swapped.contains(&index),
            Highlight::Pivot => self.pivot == Some(index),
            Highlight::Found => self.found_index == Some(index),
            Highlight::Checking => self.checking_index == Some(index),
            Highlight::Mid => self.mid == Some(index),
        }
    }

    /// The single visual state of `index`, if any set mentions it
    pub fn highlight_at(&self, index: usize) -> Option<Highlight> {
        Highlight::PRIORITY
            .into_iter()
            .find(|h| self.has_highlight(*h, index))
    }

    /// Resolved highlight of every mentioned index
    pub fn highlight_map(&self) -> FxHashMap<usize, Highlight> {
        let mut map = FxHashMap::default();
        let sets = [
            (Highlight::Sorted, self.sorted_region.iter().copied().collect::<Vec<_>>()),
            (Highlight::Comparing, self.comparing.iter().copied().collect()),
            (Highlight::Swapped, self.swapped.iter().copied().collect()),
            (Highlight::Pivot, self.pivot.into_iter().collect()),
            (Highlight::Found, self.found_index.into_iter().collect()),
            (Highlight::Checking, self.checking_index.into_iter().collect()),
            (Highlight::Mid, self.mid.into_iter().collect()),
        ];
        for (highlight, indices) in sets {
            for index in indices {
                map.entry(index)
                    .and_modify(|h: &mut Highlight| *h = (*h).min(highlight))
                    .or_insert(highlight);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StepKind;
    use std::collections::BTreeSet;

    #[test]
    fn test_sorted_wins_over_everything() {
        let mut step = Step::new(StepKind::Swap, vec![1, 2, 3]);
        step.sorted_region = BTreeSet::from([2]);
        step.swapped = BTreeSet::from([1, 2]);
        step.pivot = Some(2);
        assert_eq!(step.highlight_at(2), Some(Highlight::Sorted));
        assert_eq!(step.highlight_at(1), Some(Highlight::Swapped));
        assert_eq!(step.highlight_at(0), None);
    }

    #[test]
    fn test_map_agrees_with_per_index_lookup() {
        let mut step = Step::new(StepKind::Compare, vec![4, 5, 6, 7]);
        step.comparing = BTreeSet::from([0, 3]);
        step.pivot = Some(3);
        step.checking_index = Some(1);
        step.mid = Some(1);
        let map = step.highlight_map();
        for i in 0..step.len() {
            assert_eq!(map.get(&i).copied(), step.highlight_at(i));
        }
        assert_eq!(map[&1], Highlight::Checking);
    }
}
