//! `Sequence` cost: the hardest operator, dominated by split-position search.

use align_core::{ActivityId, CostCache, NodeId, ProcessTree, TraceSlice};

use crate::dispatch::dyn_align;

/// Cost to align `slice` against `node`'s `Sequence` children, in order.
///
/// Dispatches on arity: an empty slice costs the sum of every child's empty-slice cost, a
/// single child delegates outright, two children use the optimized boundary-split search
/// ([`align_two`]), and three or more children solve a layered-DAG shortest-path problem via
/// forward dynamic programming over a reduced set of split positions.
pub fn align(tree: &ProcessTree, node: NodeId, slice: TraceSlice<'_>, cache: &mut CostCache) -> u64 {
    let children = tree.node(node).children();
    match children {
        [] => unreachable!("ProcessTreeBuilder::build rejects Sequence with no children"),
        [only] => dyn_align(tree, *only, slice, cache),
        [a, b] => align_two(tree, *a, *b, slice, cache, node),
        _ => align_many(tree, children, slice, cache),
    }
}

/// Cost to align `slice` against the two-child sequence `(child0, child1)`, caching the
/// result under `cache_node` (the real sequence node's id for ordinary use, or a synthetic
/// transient id when called by the redo-loop to score a `(Q, R)` segment).
///
/// Builds the aliens-free slice `S'` (aliens are events in `slice` not reachable through
/// either child, charged once as deletions), then searches only the candidate splits that
/// sit on genuine operator boundaries: `0`, `|S'|`, and every index where `S'` crosses from
/// an event belonging to `child0`'s activity set into one belonging to `child1`'s. The left
/// child is evaluated first at each candidate so a partial sum already meeting the
/// best-so-far skips the right child's recursion (branch-and-bound).
pub(crate) fn align_two(
    tree: &ProcessTree,
    child0: NodeId,
    child1: NodeId,
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
    cache_node: NodeId,
) -> u64 {
    if let Some(cost) = cache.get(cache_node, slice.as_slice()) {
        return cost;
    }

    let set0 = tree.node(child0).activity_set();
    let set1 = tree.node(child1).activity_set();
    let pruned: Vec<ActivityId> = slice
        .as_slice()
        .iter()
        .copied()
        .filter(|id| set0.contains(id) || set1.contains(id))
        .collect();
    let aliens = (slice.len() - pruned.len()) as u64;
    let pruned = TraceSlice::from_raw(&pruned);
    let n = pruned.len();

    let mut splits: Vec<usize> = vec![0, n];
    for i in 1..n {
        if set1.contains(&pruned.at(i)) && set0.contains(&pruned.at(i - 1)) {
            splits.push(i);
        }
    }
    splits.sort_unstable();
    splits.dedup();

    let mut best = u64::MAX;
    for &s in &splits {
        let left = dyn_align(tree, child0, pruned.sub(0, s), cache);
        if left >= best {
            continue;
        }
        let right = dyn_align(tree, child1, pruned.sub(s, n), cache);
        best = best.min(left + right);
    }

    let cost = aliens + best;
    cache.insert(cache_node, slice.as_slice(), cost);
    cost
}

/// Cost to align `slice` against three or more sequence children via a layered-DAG
/// shortest-path forward DP.
///
/// Candidate trace positions are a reduced set of split positions: `0`, `n`, and every index
/// where the leftmost child whose activity set contains the event at that index differs from
/// the leftmost child for the previous event — splitting inside a run that can only ever
/// belong to one child cannot help. `dp[i][p]` holds the minimum cost of aligning
/// `slice[0, p)` against the first `i` children; the final transition out of layer `k-1`
/// only targets `p = n`, forcing the last child to consume the suffix.
fn align_many(tree: &ProcessTree, children: &[NodeId], slice: TraceSlice<'_>, cache: &mut CostCache) -> u64 {
    let n = slice.len();
    let k = children.len();

    let mut splits: Vec<usize> = vec![0, n];
    for i in 1..n {
        let leftmost = |event: ActivityId| {
            children
                .iter()
                .position(|&c| tree.node(c).activity_set().contains(&event))
        };
        if leftmost(slice.at(i)) != leftmost(slice.at(i - 1)) {
            splits.push(i);
        }
    }
    splits.sort_unstable();
    splits.dedup();

    const UNREACHABLE: u64 = u64::MAX;
    let mut dp = vec![UNREACHABLE; n + 1];
    dp[0] = 0;

    for (layer, &child) in children.iter().enumerate() {
        let is_last = layer + 1 == k;
        let mut next = vec![UNREACHABLE; n + 1];
        for &p in &splits {
            if dp[p] == UNREACHABLE {
                continue;
            }
            if is_last {
                let edge = dyn_align(tree, child, slice.sub(p, n), cache);
                let candidate = dp[p] + edge;
                if candidate < next[n] {
                    next[n] = candidate;
                }
                continue;
            }
            for &q in &splits {
                if q < p {
                    continue;
                }
                let edge = dyn_align(tree, child, slice.sub(p, q), cache);
                let candidate = dp[p] + edge;
                if candidate < next[q] {
                    next[q] = candidate;
                }
            }
        }
        dp = next;
    }

    dp[n]
}
