//! Cycle command
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{arrow_path, ids, print_json};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{find_any_cycle, find_cycle};

/// Execute the cycle command, from one source or across the whole graph
pub fn execute(ctx: &CommandContext, source: Option<&str>) -> Result<()> {
    let cycle = match source {
        Some(source) => find_cycle(&ctx.graph, source)?,
        None => find_any_cycle(&ctx.graph),
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "has_cycle": cycle.is_some(),
            "cycle": cycle.as_deref().map(ids),
        })),
        OutputFormat::Human => {
            match (&cycle, source) {
                (Some(nodes), _) => println!("cycle: {}", arrow_path(nodes)),
                (None, Some(source)) => println!("no cycle reachable from {}", source),
                (None, None) => println!("no cycle"),
            }
            Ok(())
        }
    }
}
