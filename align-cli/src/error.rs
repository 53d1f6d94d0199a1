//! Error types for the CLI's I/O and parsing boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::notation::NotationError;

/// Errors surfaced at the process boundary: I/O, configuration, or notation parsing.
///
/// Mirrors the teacher's split between `thiserror`-typed library errors and a thin
/// `anyhow`-style reporting layer in `main`: every variant here carries enough context to
/// print a useful diagnostic and exit non-zero.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading a tree, trace, or config file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file's TOML failed to deserialize.
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        /// The configuration file's path.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A tree or trace file's textual notation failed to parse.
    #[error("failed to parse {}: {source}", path.display())]
    Notation {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: NotationError,
    },
    /// The parsed tree violated a structural invariant.
    #[error("malformed process tree in {}: {source}", path.display())]
    Tree {
        /// The tree file's path.
        path: PathBuf,
        /// The underlying structural error.
        #[source]
        source: align_core::TreeError,
    },
    /// `--batch` found no filename stem common to both directories.
    #[error(
        "no matching *.tree/*.trace pairs found between {} and {}",
        trees_dir.display(),
        traces_dir.display()
    )]
    NoPairsFound {
        /// The directory that was scanned for `*.tree` files.
        trees_dir: PathBuf,
        /// The directory that was scanned for `*.trace` files.
        traces_dir: PathBuf,
    },
}
