#![warn(unused, missing_docs)]
//!
//! Binary entry point: parses CLI arguments, loads the optional configuration file,
//! installs a `tracing` subscriber, and dispatches to the `align` or `batch` subcommand.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use align_cli::config::Config;
use align_cli::error::CliError;
use align_cli::{batch, notation};
use align_core::Interner;

/// Computes the optimal alignment cost between a process tree and a trace.
#[derive(Debug, Parser)]
#[command(name = "align", version, about)]
struct Cli {
    /// Path to an optional TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Align a single tree/trace file pair and print the resulting cost.
    Align {
        /// Path to a file containing a tree in this crate's textual notation.
        tree: PathBuf,
        /// Path to a file containing a trace (comma/whitespace-separated activity names).
        trace: PathBuf,
    },
    /// Align every `*.tree`/`*.trace` pair sharing a filename stem across two directories.
    Batch {
        /// Directory containing `*.tree` files.
        trees_dir: PathBuf,
        /// Directory containing `*.trace` files.
        traces_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let result = match cli.command {
        Command::Align { tree, trace } => run_align(&tree, &trace),
        Command::Batch {
            trees_dir,
            traces_dir,
        } => run_batch(&trees_dir, &traces_dir),
    };

    if let Err(err) = result {
        // Widen to `anyhow::Error` only at this final reporting boundary, so the source
        // chain (CliError -> io::Error / toml::de::Error / NotationError / TreeError)
        // prints in full, the same anyhow-at-the-edge idiom the teacher uses for its own
        // endpoint errors.
        let report = anyhow::Error::from(err);
        tracing::error!("{report:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_owned(),
        source,
    })
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(&config.logging.default_filter).add_directive(LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_align(tree_path: &std::path::Path, trace_path: &std::path::Path) -> Result<(), CliError> {
    let tree_text = std::fs::read_to_string(tree_path).map_err(|source| CliError::Io {
        path: tree_path.to_owned(),
        source,
    })?;
    let trace_text = std::fs::read_to_string(trace_path).map_err(|source| CliError::Io {
        path: trace_path.to_owned(),
        source,
    })?;

    let mut interner = Interner::new();
    let (builder, root) = notation::parse_tree(&tree_text, &mut interner).map_err(|source| {
        CliError::Notation {
            path: tree_path.to_owned(),
            source,
        }
    })?;
    let tree = builder.build(root).map_err(|source| CliError::Tree {
        path: tree_path.to_owned(),
        source,
    })?;
    let trace = notation::parse_trace(&trace_text, &mut interner);

    let cost = align_engine::align(&tree, &trace);
    println!("{cost}");
    Ok(())
}

fn run_batch(trees_dir: &std::path::Path, traces_dir: &std::path::Path) -> Result<(), CliError> {
    let results = batch::run(trees_dir, traces_dir)?;
    for result in results {
        println!("{}\t{}", result.stem, result.cost);
    }
    Ok(())
}
