//! Merging coverage maps from multiple runs (or multiple shards of one run)
//! into a single aggregate, using SimpleCov's lines-combiner semantics.
//!
//! The subtlety is the null-vs-zero distinction: `None` means "no run
//! instruments this line", `Some(0)` means "instrumented but never
//! executed". Adding runs must not conflate the two: 0 + 0 = 0, but
//! null + 0 = null. Any positive count makes the line covered regardless of
//! what the other run says.
//!
//! See https://github.com/simplecov-ruby/simplecov/blob/main/lib/simplecov/combine/lines_combiner.rb

use std::collections::btree_map::Entry;

use crate::model::{CoverageMap, LineArray, LineHits};

/// Combine the hits for one line across two runs.
///
/// Missing operands count as 0 for the addition, but if the total is 0 and
/// either side was missing, the line stays "not applicable" — it only
/// becomes a real 0 when both runs explicitly report 0.
pub fn combine_hits(a: LineHits, b: LineHits) -> LineHits {
    let total = a.unwrap_or(0) + b.unwrap_or(0);
    if total == 0 && (a.is_none() || b.is_none()) {
        None
    } else {
        Some(total)
    }
}

/// Combine two line arrays position-wise. The result has the length of the
/// longer input; positions past the shorter array's end are treated as
/// "not applicable", never as 0.
pub fn combine_arrays(one: &LineArray, two: &LineArray) -> LineArray {
    let len = one.len().max(two.len());
    (0..len)
        .map(|i| {
            let a = one.get(i).copied().flatten();
            let b = two.get(i).copied().flatten();
            combine_hits(a, b)
        })
        .collect()
}

/// Fold a sequence of coverage maps into one. Keys are the union of all
/// input keys; same-keyed arrays are combined element-wise.
///
/// A key present in only one side of a merge step is copied through
/// unchanged. (Combining it against an empty array instead would turn its
/// explicit zeros into "not applicable" under the combiner rule, silently
/// losing the fact that a run instrumented those lines — so a single-map
/// merge would not even be a no-op.)
pub fn merge<I>(inputs: I) -> CoverageMap
where
    I: IntoIterator<Item = CoverageMap>,
{
    let mut combined = CoverageMap::new();
    for input in inputs {
        for (path, lines) in input {
            match combined.entry(path) {
                Entry::Occupied(mut entry) => {
                    let merged = combine_arrays(entry.get(), &lines);
                    entry.insert(merged);
                }
                Entry::Vacant(entry) => {
                    entry.insert(lines);
                }
            }
        }
    }
    combined
}
