//! Shared output helpers for commands

use graphwalk_core::error::Result;
use graphwalk_core::graph::Node;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a node sequence as `a -> b -> c`
pub fn arrow_path(nodes: &[Node]) -> String {
    nodes.iter().map(Node::id).collect::<Vec<_>>().join(" -> ")
}

/// Node ids, for JSON fields that only need identity
pub fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::id).collect()
}
