//! `Xor` exclusive-choice cost.

use align_core::{CostCache, NodeId, ProcessTree, TraceSlice};

use crate::dispatch::dyn_align;

/// Cost to align `slice` against an exclusive choice over `children`: the minimum cost among
/// the children, short-circuiting as soon as any child returns `0`.
pub fn align(
    tree: &ProcessTree,
    children: &[NodeId],
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> u64 {
    let mut best = u64::MAX;
    for &child in children {
        let cost = dyn_align(tree, child, slice, cache);
        if cost == 0 {
            return 0;
        }
        best = best.min(cost);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::{ActivityId, ProcessTreeBuilder, Trace};

    #[test]
    fn picks_the_cheapest_child() {
        let mut builder = ProcessTreeBuilder::new();
        let c = builder.activity(ActivityId::from_raw(0));
        let d = builder.activity(ActivityId::from_raw(1));
        let xor = builder.xor(vec![c, d]);
        let tree = builder.build(xor).unwrap();

        let mut cache = CostCache::new();
        let trace = Trace::new(vec![ActivityId::from_raw(0)]);
        assert_eq!(dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache), 0);

        let mut cache = CostCache::new();
        let trace = Trace::new(vec![]);
        assert_eq!(dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache), 1);

        let mut cache = CostCache::new();
        let trace = Trace::new(vec![ActivityId::from_raw(0), ActivityId::from_raw(1)]);
        assert_eq!(dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache), 1);
    }
}
