//! Per-operator alignment routines, one module per process-tree operator.

/// `Activity(a)` leaf cost.
pub mod activity;
/// `Parallel` interleaving cost.
pub mod parallel;
/// Redo-loop `*(R, Q)` cost.
pub mod redo_loop;
/// `Sequence` cost: the hardest operator, dominated by split-position search.
pub mod sequence;
/// `Silent` leaf cost.
pub mod silent;
/// `Xor` exclusive-choice cost.
pub mod xor;
