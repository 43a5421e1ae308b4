//! CLI argument parsing for graphwalk
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose, logging

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use graphwalk_core::config::HeuristicKind;

/// Output format for graphwalk commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Graphwalk - BFS, DFS, cycle detection and A* over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (.json, .toml, .yaml)
    #[arg(long, short, global = true)]
    pub graph: Option<PathBuf>,

    /// Search configuration file (TOML)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events for each phase
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "graphwalk_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and edge counts
    Info,

    /// Breadth-first traversal from a node
    Bfs {
        /// Node to start from
        source: String,

        /// Only report whether this node is reachable
        #[arg(long, short)]
        target: Option<String>,

        /// Include each node's hop count from the source
        #[arg(long, conflicts_with = "target")]
        depths: bool,
    },

    /// Depth-first traversal from a node
    Dfs {
        /// Node to start from
        source: String,

        /// Stop once this node is visited
        #[arg(long, short)]
        target: Option<String>,

        /// Use the depth-limited recursive variant
        #[arg(long)]
        recursive: bool,
    },

    /// Look for a directed cycle
    Cycle {
        /// Only consider cycles reachable from this node
        source: Option<String>,
    },

    /// Shortest path between two nodes (A*)
    Path {
        /// Starting node
        start: String,

        /// Goal node
        goal: String,

        /// Heuristic (euclidean, zero); defaults to the configured one
        #[arg(long, short = 'H', value_parser = parse_heuristic)]
        heuristic: Option<HeuristicKind>,
    },
}

fn parse_heuristic(s: &str) -> Result<HeuristicKind, String> {
    s.parse()
}
