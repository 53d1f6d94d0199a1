#![warn(unused, missing_docs)]
//!
//! The recursive dynamic-programming alignment engine: the hard core of conformance
//! checking.
//!
//! Given a [`align_core::ProcessTree`] and a [`align_core::Trace`], [`align`] computes the
//! minimum number of single-event edits (insertions of model-required events missing from
//! the trace, deletions of trace events the model cannot explain) required to transform the
//! trace into a sequence the tree accepts.
//!
//! The engine is single-threaded and synchronous: one call to [`align`] constructs a fresh
//! [`align_core::CostCache`], runs [`dispatch::dyn_align`] to completion, and discards the
//! cache. Nothing here suspends, spawns, or performs I/O; running independent alignments
//! concurrently just means calling [`align`] from multiple threads on disjoint
//! `(tree, trace)` pairs, since each call owns its own cache.
//!
//! Goals
//! -----
//!
//! - Be exact: every operator's cost function is a faithful implementation of its
//!   compositional definition, not an approximation (with the single, deliberate exception
//!   of [`operators::parallel`]'s first-match-wins assignment under overlapping activity
//!   sets, which is the engine's defined semantics rather than a bug).
//! - Be tractable: memoize aggressively, prune trace-local aliens before recursing, and
//!   restrict split-position search to genuine operator boundaries.

/// The dispatcher: cache lookup, pruning, and dispatch to the per-operator routines.
pub mod dispatch;
/// One module per process-tree operator's alignment routine.
pub mod operators;

use align_core::{CostCache, ProcessTree, Trace};

/// Computes the optimal alignment cost between `trace` and the language of `tree`.
///
/// Constructs a fresh [`CostCache`] scoped to this call, runs the dispatcher on the tree's
/// root against the full trace, and discards the cache before returning. Does not mutate
/// `tree` or `trace`.
///
/// # Preconditions
///
/// `tree` must have been produced by [`align_core::ProcessTreeBuilder::build`], so its
/// structural invariants hold and every node's activity set is already populated.
///
/// # Postconditions
///
/// Returns the optimal, non-negative alignment cost. Every activity id in `trace` that is
/// not in the tree root's activity set is treated as alien and incurs exactly one deletion.
pub fn align(tree: &ProcessTree, trace: &Trace) -> u64 {
    let mut cache = CostCache::new();
    let root = tree.root();
    let cost = dispatch::dyn_align(tree, root, trace.as_slice(), &mut cache);
    tracing::debug!(
        trace_len = trace.len(),
        tree_nodes = tree.len(),
        cache_entries = cache.len(),
        cost,
        "alignment complete"
    );
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::{ActivityId, ProcessTreeBuilder, Trace};

    fn a(raw: u32) -> ActivityId {
        ActivityId::from_raw(raw)
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let mut builder = ProcessTreeBuilder::new();
        let x = builder.activity(a(0));
        let y = builder.activity(a(1));
        let seq = builder.sequence(vec![x, y]);
        let tree = builder.build(seq).unwrap();
        let trace = Trace::new(vec![a(0), a(1)]);

        assert_eq!(align(&tree, &trace), 0);
        assert_eq!(align(&tree, &trace), 0);
    }
}
