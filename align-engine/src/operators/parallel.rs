//! `Parallel` interleaving cost.

use align_core::{ActivityId, CostCache, NodeId, ProcessTree, TraceSlice};

use crate::dispatch::dyn_align;

/// Cost to align `slice` against an interleaving of `children`'s languages.
///
/// Walks `slice` left to right, assigning each event to the first child whose activity set
/// contains it; events matched by no child are counted as `unmatched`. Cost is `unmatched`
/// plus the sum of each child's alignment cost against its assigned sub-trace.
///
/// This is exact when children have pairwise-disjoint activity sets, which a well-formed
/// tree guarantees by construction. When sets overlap, first-match-wins is a defined (not a
/// bug-to-be-fixed) greedy heuristic whose cost is an upper bound on the true optimum; see
/// `DESIGN.md` for why this engine keeps it rather than solving the general assignment
/// problem.
pub fn align(
    tree: &ProcessTree,
    children: &[NodeId],
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> u64 {
    let mut buckets: Vec<Vec<ActivityId>> = vec![Vec::new(); children.len()];
    let mut unmatched = 0u64;

    for (_, event) in slice.iter() {
        match children
            .iter()
            .position(|&child| tree.node(child).activity_set().contains(&event))
        {
            Some(index) => buckets[index].push(event),
            None => unmatched += 1,
        }
    }

    let mut cost = unmatched;
    for (&child, bucket) in children.iter().zip(buckets.iter()) {
        cost += dyn_align(tree, child, TraceSlice::from_raw(bucket), cache);
    }
    cost
}
