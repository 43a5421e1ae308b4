//! Info command
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::print_json;
use graphwalk_core::error::Result;
use graphwalk_core::graph::GraphProvider;

/// Execute the info command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = &ctx.graph;
    let positioned = graph
        .nodes()
        .iter()
        .filter(|node| node.position.is_some())
        .count();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "nodes": graph.node_count(),
            "arcs": graph.edge_count(),
            "undirected": graph.is_undirected(),
            "positioned": positioned,
            "ids": graph.node_ids(),
        })),
        OutputFormat::Human => {
            let kind = if graph.is_undirected() {
                "undirected"
            } else {
                "directed"
            };
            println!("{} graph", kind);
            println!("nodes: {}", graph.node_count());
            println!("arcs: {}", graph.edge_count());
            if !ctx.cli.quiet {
                println!("positioned: {}", positioned);
            }
            Ok(())
        }
    }
}
