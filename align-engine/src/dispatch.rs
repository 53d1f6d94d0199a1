//! The dispatcher: cache lookup, alien pruning, and dispatch to the per-operator routines.

use align_core::{CostCache, NodeId, Operator, ProcessTree, TraceSlice};

use crate::operators;

/// Returns the minimum edit cost to align `slice` against the language of `node`.
///
/// 1. Looks up `(node.id(), slice)` in `cache`; returns immediately on a hit.
/// 2. Prunes any activity id foreign to `node`'s activity set out of `slice`, counting the
///    removed events as `aliens` (every alien event costs exactly one deletion regardless of
///    where in the recursion it's charged, so charging it once here is both correct and
///    maximizes cache reuse across traces sharing common sub-patterns).
/// 3. Dispatches on the node's operator to the matching routine in [`crate::operators`].
/// 4. Records `aliens + operator_cost` in `cache`, keyed by the *original* slice (pruning is
///    a deterministic function of `(node, original slice)`, so this is sufficient).
pub fn dyn_align(
    tree: &ProcessTree,
    node: NodeId,
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> u64 {
    if let Some(cost) = cache.get(node, slice.as_slice()) {
        return cost;
    }

    let activity_set = tree.node(node).activity_set();
    let pruned: Option<Vec<_>> = if slice
        .as_slice()
        .iter()
        .any(|id| !activity_set.contains(id))
    {
        Some(
            slice
                .as_slice()
                .iter()
                .copied()
                .filter(|id| activity_set.contains(id))
                .collect(),
        )
    } else {
        None
    };

    let cost = match &pruned {
        Some(events) => {
            let aliens = (slice.len() - events.len()) as u64;
            aliens + dispatch_operator(tree, node, TraceSlice::from_raw(events), cache)
        }
        None => dispatch_operator(tree, node, slice, cache),
    };

    cache.insert(node, slice.as_slice(), cost);
    cost
}

fn dispatch_operator(
    tree: &ProcessTree,
    node: NodeId,
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> u64 {
    let tree_node = tree.node(node);
    match tree_node.operator() {
        Operator::Activity(a) => operators::activity::align(a, slice),
        Operator::Silent => operators::silent::align(slice),
        Operator::Xor => operators::xor::align(tree, tree_node.children(), slice, cache),
        Operator::Parallel => operators::parallel::align(tree, tree_node.children(), slice, cache),
        Operator::Sequence => operators::sequence::align(tree, node, slice, cache),
        Operator::RedoLoop => {
            let children = tree_node.children();
            debug_assert_eq!(children.len(), 2, "build() guarantees RedoLoop arity");
            operators::redo_loop::align(tree, children[0], children[1], slice, cache)
        }
    }
}
