#![warn(unused, missing_docs)]
//!
//! Data model for [`align-engine`](https://crates.io/crates/align-engine): process trees,
//! traces, activity interning and the alignment engine's cost cache.
//!
//! This crate owns every type the engine needs to exist but contains none of the alignment
//! algorithm itself: that lives in `align-engine`, which depends on this crate for its data
//! model. Splitting the two mirrors the distilled specification's separation between the
//! "hard core" (the recursive dynamic-programming engine) and its data model collaborators.
//!
//! Goals
//! -----
//!
//! - Make a malformed process tree a value that cannot be constructed ("parse, don't
//!   validate"), so the engine never has to re-check structural invariants on every call.
//! - Keep trace slicing at zero cost: a [`trace::TraceSlice`] is a thin wrapper around a
//!   native Rust slice.
//! - Provide a cost cache keyed by `(NodeId, slice content)` that can be looked up without
//!   copying the slice being queried.

/// Opaque activity identifiers and the bidirectional name interner.
pub mod activity;
/// The alignment engine's memoization cache.
pub mod cache;
/// Error types for the fallible tree/trace construction APIs.
pub mod error;
/// Process trees: arena-owned nodes, operators and activity sets.
pub mod tree;

/// Traces and zero-copy trace slices.
pub mod trace;

pub use activity::{ActivityId, Interner};
pub use cache::CostCache;
pub use error::TreeError;
pub use trace::{Trace, TraceSlice};
pub use tree::{NodeId, Operator, ProcessTree, ProcessTreeBuilder};
