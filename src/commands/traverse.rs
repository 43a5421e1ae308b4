//! BFS and DFS commands
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{arrow_path, ids, print_json};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{
    bfs, bfs_depths, bfs_find, dfs, dfs_find, dfs_find_recursive, dfs_recursive_with_limit,
    SearchOutcome, Traversal,
};

/// Execute the bfs command
pub fn execute_bfs(
    ctx: &CommandContext,
    source: &str,
    target: Option<&str>,
    depths: bool,
) -> Result<()> {
    if let Some(target) = target {
        let found = bfs_find(&ctx.graph, source, target)?;
        return output_reachability(ctx, source, target, found);
    }

    if depths {
        let visited = bfs_depths(&ctx.graph, source)?;
        return match ctx.cli.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "root": source,
                "visited": visited,
            })),
            OutputFormat::Human => {
                for entry in &visited {
                    println!("{}\t{}", entry.depth, entry.node.id);
                }
                Ok(())
            }
        };
    }

    let traversal = bfs(&ctx.graph, source)?;
    output_traversal(ctx, &traversal)
}

/// Execute the dfs command
pub fn execute_dfs(
    ctx: &CommandContext,
    source: &str,
    target: Option<&str>,
    recursive: bool,
) -> Result<()> {
    let limit = ctx.config.max_recursion_depth;

    if let Some(target) = target {
        let outcome = if recursive {
            dfs_find_recursive(&ctx.graph, source, target, limit)?
        } else {
            dfs_find(&ctx.graph, source, target)?
        };
        return output_search(ctx, source, target, &outcome);
    }

    let traversal = if recursive {
        dfs_recursive_with_limit(&ctx.graph, source, limit)?
    } else {
        dfs(&ctx.graph, source)?
    };
    output_traversal(ctx, &traversal)
}

fn output_traversal(ctx: &CommandContext, traversal: &Traversal) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(traversal),
        OutputFormat::Human => {
            for id in traversal.ids() {
                println!("{}", id);
            }
            Ok(())
        }
    }
}

fn output_reachability(
    ctx: &CommandContext,
    source: &str,
    target: &str,
    found: bool,
) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "target": target,
            "found": found,
        })),
        OutputFormat::Human => {
            if found {
                println!("{} is reachable from {}", target, source);
            } else {
                println!("{} is not reachable from {}", target, source);
            }
            Ok(())
        }
    }
}

fn output_search(
    ctx: &CommandContext,
    source: &str,
    target: &str,
    outcome: &SearchOutcome,
) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "target": target,
            "found": outcome.found,
            "visited": ids(&outcome.path),
        })),
        OutputFormat::Human => {
            if outcome.found {
                println!("found {}", target);
            } else {
                println!("{} is not reachable from {}", target, source);
            }
            if !ctx.cli.quiet {
                println!("visited: {}", arrow_path(&outcome.path));
            }
            Ok(())
        }
    }
}
