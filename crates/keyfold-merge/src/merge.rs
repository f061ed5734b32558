//! Keyed-sum merge of two sparse vectors.
//!
//! Accumulation is hash-based; ordering comes from a separate sort over the
//! distinct keys. Keys duplicated *within* one input fold into the same
//! slot, the same as keys shared *across* inputs.

use std::collections::HashMap;

use tracing::debug;

use keyfold_types::{Pair, SparseVector};

/// Merge two sparse vectors, summing values that share a key.
///
/// Every key present in either input appears exactly once in the result,
/// carrying the sum of all its values across both inputs. Result keys are
/// strictly ascending, so the returned vector is always normalized.
///
/// Pure function: the inputs are not modified and the result shares no
/// state with them. The order of `a` relative to `b` does not affect the
/// result.
pub fn merge(a: &SparseVector, b: &SparseVector) -> SparseVector {
    let mut sums: HashMap<i64, i64> = HashMap::new();
    for pair in a.iter().chain(b.iter()) {
        *sums.entry(pair.key).or_insert(0) += pair.value;
    }

    let mut keys: Vec<i64> = sums.keys().copied().collect();
    keys.sort_unstable();

    debug!(
        pairs = a.len() + b.len(),
        distinct = keys.len(),
        "folded sparse vectors"
    );

    keys.into_iter().map(|key| Pair::new(key, sums[&key])).collect()
}
