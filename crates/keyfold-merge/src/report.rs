//! Fold counters alongside a merge.

use std::collections::HashSet;

use serde::Serialize;

use keyfold_types::SparseVector;

use crate::merge::merge;

/// The result of a keyed-sum merge, with counters describing the fold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// The merged vector, normalized.
    pub merged: SparseVector,
    /// Total input pairs folded, duplicates included.
    pub pairs_folded: usize,
    /// Distinct keys present in both inputs.
    pub shared_keys: usize,
    /// Distinct keys present only in the left input.
    pub only_left: usize,
    /// Distinct keys present only in the right input.
    pub only_right: usize,
}

impl MergeReport {
    /// Distinct keys in the merged result.
    pub fn distinct_keys(&self) -> usize {
        self.merged.len()
    }

    /// Returns `true` if nothing was folded.
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

/// Merge two sparse vectors and report how their key sets overlapped.
pub fn merge_report(a: &SparseVector, b: &SparseVector) -> MergeReport {
    let left: HashSet<i64> = a.iter().map(|p| p.key).collect();
    let right: HashSet<i64> = b.iter().map(|p| p.key).collect();

    MergeReport {
        pairs_folded: a.len() + b.len(),
        shared_keys: left.intersection(&right).count(),
        only_left: left.difference(&right).count(),
        only_right: right.difference(&left).count(),
        merged: merge(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(i64, i64)]) -> SparseVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn counts_shared_and_exclusive_keys() {
        let a = vector(&[(1, 2), (2, 3)]);
        let b = vector(&[(2, 3), (3, 1)]);

        let report = merge_report(&a, &b);
        assert_eq!(report.merged, vector(&[(1, 2), (2, 6), (3, 1)]));
        assert_eq!(report.pairs_folded, 4);
        assert_eq!(report.shared_keys, 1);
        assert_eq!(report.only_left, 1);
        assert_eq!(report.only_right, 1);
        assert_eq!(report.distinct_keys(), 3);
    }

    #[test]
    fn duplicate_keys_count_once_per_side() {
        let a = vector(&[(1, 1), (1, 4)]);
        let b = vector(&[(1, 0)]);

        let report = merge_report(&a, &b);
        assert_eq!(report.pairs_folded, 3);
        assert_eq!(report.shared_keys, 1);
        assert_eq!(report.only_left, 0);
        assert_eq!(report.only_right, 0);
        assert_eq!(report.merged, vector(&[(1, 5)]));
    }

    #[test]
    fn empty_inputs_produce_empty_report() {
        let report = merge_report(&SparseVector::new(), &SparseVector::new());
        assert!(report.is_empty());
        assert_eq!(report, MergeReport::default());
    }

    #[test]
    fn report_serializes_for_json_output() {
        let report = merge_report(&vector(&[(1, 2)]), &SparseVector::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pairs_folded"], 1);
        assert_eq!(json["merged"][0]["key"], 1);
    }
}
