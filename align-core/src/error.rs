//! Error types for the fallible tree-construction API.

use thiserror::Error;

use crate::tree::NodeId;

/// The sole fallible outcome anywhere below `align-cli`: a structural violation caught once,
/// at [`crate::tree::ProcessTreeBuilder::build`] time.
///
/// Once a [`crate::tree::ProcessTree`] value exists, `align-engine` trusts it unconditionally:
/// there is no "unknown operator" or "wrong arity" case left to handle at dispatch time,
/// because Rust's `match` over the closed [`crate::tree::Operator`] enum is exhaustive at
/// compile time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An operator was built with the wrong number of children (a `RedoLoop` without exactly
    /// two, or a `Sequence`/`Parallel`/`Xor` with zero).
    #[error("{operator} node {node:?} has wrong arity: expected {expected}, found {found}")]
    WrongArity {
        /// The operator's name, for diagnostics.
        operator: &'static str,
        /// The node that was built with the wrong arity.
        node: NodeId,
        /// A human-readable description of the expected arity.
        expected: &'static str,
        /// The number of children actually supplied.
        found: usize,
    },
    /// A node referenced a child that was never added to the builder's arena.
    #[error("node {parent:?} references dangling child {child:?}")]
    DanglingChild {
        /// The node whose child reference is dangling.
        parent: NodeId,
        /// The child node id that does not exist in the arena.
        child: NodeId,
    },
}
