//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all
//! subcommands. Every subcommand reads one tree, chosen by `TreeArgs`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Built-in trees, usable without a spec directory
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTree {
    Full,
    Simplified,
}

/// spec-tree - inspect Spec Trees: status rollup, paths and context
#[derive(Parser, Debug)]
#[command(name = "spec-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which tree to read
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeArgs {
    /// Spec directory, or a `.json` tree snapshot (default: [tree].root)
    #[arg(short, long, conflicts_with = "sample")]
    pub source: Option<PathBuf>,

    /// Use a built-in sample tree instead of reading from disk
    #[arg(long, value_enum)]
    pub sample: Option<SampleTree>,

    /// Show recorded states instead of rolling them up from children
    #[arg(long)]
    pub no_rollup: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tree with per-node state and totals
    Status {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Show the path from the root to a node
    Path {
        /// Node id (or a unique label)
        id: String,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Show the context set of a node: its path plus lower-index siblings
    Context {
        /// Node id (or a unique label)
        id: String,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// List every node in pre-order
    List {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

impl Commands {
    pub fn tree_args(&self) -> &TreeArgs {
        match self {
            Commands::Status { tree }
            | Commands::Path { tree, .. }
            | Commands::Context { tree, .. }
            | Commands::List { tree } => tree,
        }
    }
}
