//! Path command
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{arrow_path, print_json};
use graphwalk_core::config::HeuristicKind;
use graphwalk_core::error::Result;
use graphwalk_core::graph::a_star;

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    start: &str,
    goal: &str,
    heuristic: HeuristicKind,
) -> Result<()> {
    let result = a_star(&ctx.graph, start, goal, &heuristic)?;

    match ctx.cli.format {
        OutputFormat::Json => match &result {
            Some(path) => print_json(&serde_json::json!({
                "found": true,
                "heuristic": heuristic.to_string(),
                "from": path.from,
                "to": path.to,
                "nodes": path.nodes,
                "cost": path.cost,
                "hops": path.path_length(),
            })),
            None => print_json(&serde_json::json!({
                "found": false,
                "heuristic": heuristic.to_string(),
                "from": start,
                "to": goal,
            })),
        },
        OutputFormat::Human => {
            match &result {
                Some(path) => {
                    println!("{}", arrow_path(&path.nodes));
                    println!("cost: {}", path.cost);
                }
                None => println!("no path from {} to {}", start, goal),
            }
            Ok(())
        }
    }
}
