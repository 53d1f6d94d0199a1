//! Batch orchestration: pairing `*.tree`/`*.trace` files across two directories and running
//! [`align_engine::align`] over each pair.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use align_core::Interner;

use crate::error::CliError;
use crate::notation;

/// The outcome of aligning one `(tree, trace)` pair found by filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairResult {
    /// The filename stem shared by the `.tree` and `.trace` files.
    pub stem: String,
    /// The resulting alignment cost.
    pub cost: u64,
}

/// Pairs every `*.tree` file in `trees_dir` with the `*.trace` file sharing its filename
/// stem in `traces_dir`, runs `align` over each pair (sequentially — see `DESIGN.md` for why
/// this revision doesn't parallelize across pairs), and returns one [`PairResult`] per pair,
/// sorted by stem for deterministic output.
///
/// Files present in only one directory are silently skipped; this mirrors "pairing files in
/// two directories by filename stem" from the crate's top-level docs, not an error condition
/// of its own.
pub fn run(trees_dir: &Path, traces_dir: &Path) -> Result<Vec<PairResult>, CliError> {
    let mut stems = stems_with_extension(trees_dir, "tree")?;
    stems.retain(|stem| traces_dir.join(format!("{stem}.trace")).is_file());
    stems.sort();

    if stems.is_empty() {
        return Err(CliError::NoPairsFound {
            trees_dir: trees_dir.to_owned(),
            traces_dir: traces_dir.to_owned(),
        });
    }

    let mut results = Vec::with_capacity(stems.len());
    for stem in stems {
        let tree_path = trees_dir.join(format!("{stem}.tree"));
        let trace_path = traces_dir.join(format!("{stem}.trace"));

        let tree_text = read_to_string(&tree_path)?;
        let trace_text = read_to_string(&trace_path)?;

        let mut interner = Interner::new();
        let (builder, root) =
            notation::parse_tree(&tree_text, &mut interner).map_err(|source| CliError::Notation {
                path: tree_path.clone(),
                source,
            })?;
        let tree = builder.build(root).map_err(|source| CliError::Tree {
            path: tree_path,
            source,
        })?;
        let trace = notation::parse_trace(&trace_text, &mut interner);

        let cost = align_engine::align(&tree, &trace);
        tracing::info!(stem = %stem, cost, "aligned pair");
        results.push(PairResult { stem, cost });
    }

    Ok(results)
}

fn stems_with_extension(dir: &Path, extension: &str) -> Result<Vec<String>, CliError> {
    let entries = fs::read_dir(dir).map_err(|source| CliError::Io {
        path: dir.to_owned(),
        source,
    })?;

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CliError::Io {
            path: dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        if path.extension() == Some(OsStr::new(extension)) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                stems.push(stem.to_owned());
            }
        }
    }
    Ok(stems)
}

fn read_to_string(path: &PathBuf) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })
}
