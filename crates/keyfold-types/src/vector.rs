use std::slice;

use serde::{Deserialize, Serialize};

use crate::pair::Pair;

/// An ordered sequence of keyed values.
///
/// Input vectors carry pairs in whatever order the producer supplied them,
/// duplicate keys included. A *normalized* vector has strictly increasing
/// keys with one pair per key; merge output always satisfies
/// [`is_normalized`](SparseVector::is_normalized).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector(Vec<Pair>);

impl SparseVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from pairs, preserving their order.
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }

    /// Number of pairs (not distinct keys).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a pair at the end of the sequence.
    pub fn push(&mut self, pair: Pair) {
        self.0.push(pair);
    }

    /// The pairs as a slice, in sequence order.
    pub fn pairs(&self) -> &[Pair] {
        &self.0
    }

    /// Iterate over the pairs in sequence order.
    pub fn iter(&self) -> slice::Iter<'_, Pair> {
        self.0.iter()
    }

    /// Returns `true` if keys are strictly increasing (no duplicates).
    pub fn is_normalized(&self) -> bool {
        self.0.windows(2).all(|w| w[0].key < w[1].key)
    }
}

impl FromIterator<Pair> for SparseVector {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<(i64, i64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(Pair::from).collect())
    }
}

impl IntoIterator for SparseVector {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = &'a Pair;
    type IntoIter = slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
