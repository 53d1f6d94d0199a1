//! Redo-loop `*(R, Q)` cost: accepts exactly the language `R (Q R)*`.

use align_core::{CostCache, NodeId, ProcessTree, TraceSlice};

use crate::dispatch::dyn_align;
use crate::operators::sequence::align_two;

/// Cost to align `slice` against the redo-loop `*(body, redo)`.
///
/// The empty trace must still execute the mandatory body once: cost = `dyn_align(body,
/// empty)`. Otherwise, tries a cheap greedy upper-bound seed first (§ below); if that already
/// finds a zero-cost decomposition, returns immediately. Otherwise computes, for every split
/// point `i`, the cost of aligning `slice[0, i)` against one body execution plus the cost of
/// aligning `slice[i, n)` against zero or more `(redo, body)` repetitions, and returns the
/// minimum over all `i`.
///
/// The `(redo, body)` repetition cost table `qr_cost[i][j]` is seeded by scoring each
/// segment directly as a two-child sequence (via [`align_two`], under a synthetic node id
/// distinct from any real arena node so its cache entries can't collide with one), then
/// tightened by a bounded all-pairs relaxation: composing two adjacent repetitions can only
/// ever be cheaper than treating the combined span as one repetition.
pub fn align(
    tree: &ProcessTree,
    body: NodeId,
    redo: NodeId,
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> u64 {
    let n = slice.len();
    if n == 0 {
        return dyn_align(tree, body, TraceSlice::empty(), cache);
    }

    if let Some(0) = greedy_seed(tree, body, redo, slice, cache) {
        return 0;
    }

    let r_cost: Vec<u64> = (0..=n)
        .map(|i| dyn_align(tree, body, slice.sub(0, i), cache))
        .collect();

    let qr_node = transient_sequence_id(redo, body);
    let mut qr_cost = vec![vec![0u64; n + 1]; n + 1];
    for i in 0..=n {
        for j in i..=n {
            qr_cost[i][j] = if i == j {
                0
            } else {
                align_two(tree, redo, body, slice.sub(i, j), cache, qr_node)
            };
        }
    }

    for _pass in 0..n.max(1) {
        let mut changed = false;
        for i in 0..=n {
            for j in (i + 1)..=n {
                if qr_cost[i][j] == 0 {
                    continue;
                }
                for m in (i + 1)..j {
                    let candidate = qr_cost[i][m] + qr_cost[m][j];
                    if candidate < qr_cost[i][j] {
                        qr_cost[i][j] = candidate;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    (0..=n).map(|i| r_cost[i] + qr_cost[i][n]).min().unwrap()
}

/// Greedy upper-bound decomposition: if `slice` starts and ends inside `body`'s activity
/// set, walk it as alternating runs "inside body's set" / "outside it", aligning the former
/// against `body` and the latter against `redo`. A valid upper bound, and frequently exact
/// (cost `0`) on conformant traces, which lets [`align`] skip the general computation
/// entirely in the common case.
fn greedy_seed(
    tree: &ProcessTree,
    body: NodeId,
    redo: NodeId,
    slice: TraceSlice<'_>,
    cache: &mut CostCache,
) -> Option<u64> {
    let n = slice.len();
    let body_set = tree.node(body).activity_set();
    if !body_set.contains(&slice.at(0)) || !body_set.contains(&slice.at(n - 1)) {
        return None;
    }

    let mut total = 0u64;
    let mut i = 0;
    let mut in_body = true;
    while i < n {
        let start = i;
        while i < n && body_set.contains(&slice.at(i)) == in_body {
            i += 1;
        }
        let run = slice.sub(start, i);
        let child = if in_body { body } else { redo };
        total += dyn_align(tree, child, run, cache);
        in_body = !in_body;
    }
    Some(total)
}

/// Mints a synthetic [`NodeId`] for the transient `(redo, body)` sequence scored by
/// [`align_two`], via a Cantor pairing of the two real children's arena indices negated into
/// a disjoint id range below zero. Distinct `(redo, body)` pairs never collide, and no
/// synthetic id can ever equal a real arena node's id.
pub(crate) fn transient_sequence_id(q: NodeId, r: NodeId) -> NodeId {
    let (k1, k2) = (q.arena_index(), r.arena_index());
    let paired = (k1 + k2) * (k1 + k2 + 1) / 2 + k2;
    NodeId::synthetic(paired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::{ActivityId, ProcessTreeBuilder, Trace};

    fn a(raw: u32) -> ActivityId {
        ActivityId::from_raw(raw)
    }

    #[test]
    fn empty_trace_requires_one_body_execution() {
        let mut builder = ProcessTreeBuilder::new();
        let x = builder.activity(a(0));
        let y = builder.activity(a(1));
        let body = builder.sequence(vec![x, y]);
        let redo = builder.activity(a(2));
        let loop_node = builder.redo_loop(body, redo);
        let tree = builder.build(loop_node).unwrap();

        let trace = Trace::new(vec![]);
        let mut cache = CostCache::new();
        assert_eq!(
            dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache),
            2
        );
    }

    #[test]
    fn single_body_event_costs_zero() {
        let mut builder = ProcessTreeBuilder::new();
        let body = builder.activity(a(0));
        let redo = builder.activity(a(1));
        let loop_node = builder.redo_loop(body, redo);
        let tree = builder.build(loop_node).unwrap();

        let trace = Trace::new(vec![a(0)]);
        let mut cache = CostCache::new();
        assert_eq!(
            dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache),
            0
        );
    }

    #[test]
    fn repeated_body_redo_pairs_cost_zero() {
        let mut builder = ProcessTreeBuilder::new();
        let x = builder.activity(a(0));
        let y = builder.activity(a(1));
        let body = builder.sequence(vec![x, y]);
        let f = builder.activity(a(2));
        let loop_node = builder.redo_loop(body, f);
        let tree = builder.build(loop_node).unwrap();

        let trace = Trace::new(vec![
            a(0), a(1), a(2), a(0), a(1), a(2), a(0), a(1),
        ]);
        let mut cache = CostCache::new();
        assert_eq!(
            dyn_align(&tree, tree.root(), trace.as_slice(), &mut cache),
            0
        );
    }
}
