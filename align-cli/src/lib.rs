#![warn(unused, missing_docs)]
//!
//! A minimal driver binary wiring `(process tree, trace)` file pairs to
//! [`align_engine::align`] and printing the resulting cost.
//!
//! This stands in for, but does not replace, a real XES/PNML front end: the textual
//! notation parsed by [`notation`] is deliberately small (documented in that module) and is
//! not any standardized process-mining interchange format.

/// Batch orchestration over directories of `*.tree`/`*.trace` file pairs.
pub mod batch;
/// Optional TOML configuration for the driver binary.
pub mod config;
/// Error types for the CLI's I/O and parsing boundary.
pub mod error;
/// The minimal textual notation for trees and traces.
pub mod notation;
