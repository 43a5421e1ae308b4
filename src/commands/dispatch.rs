//! Command dispatch logic for graphwalk

use std::time::Instant;

use graphwalk_core::bail_usage;
use graphwalk_core::config::SearchConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, GraphDescription};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{cycle, info, path, traverse};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: SearchConfig,
    pub graph: Graph,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let Some(graph_path) = &cli.graph else {
        bail_usage!("no graph given; pass --graph <FILE>");
    };

    let mut description = GraphDescription::load(graph_path)?;
    description.undirected = config.resolve_undirected(description.undirected);
    let graph = Graph::from_description(&description)?;

    debug!(
        elapsed = ?start.elapsed(),
        nodes = graph.node_count(),
        arcs = graph.edge_count(),
        "load_graph"
    );

    let ctx = CommandContext { cli, config, graph };

    let result = match &cli.command {
        Commands::Info => info::execute(&ctx),
        Commands::Bfs {
            source,
            target,
            depths,
        } => traverse::execute_bfs(&ctx, source, target.as_deref(), *depths),
        Commands::Dfs {
            source,
            target,
            recursive,
        } => traverse::execute_dfs(&ctx, source, target.as_deref(), *recursive),
        Commands::Cycle { source } => cycle::execute(&ctx, source.as_deref()),
        Commands::Path {
            start: from,
            goal,
            heuristic,
        } => path::execute(&ctx, from, goal, heuristic.unwrap_or(ctx.config.default_heuristic)),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
