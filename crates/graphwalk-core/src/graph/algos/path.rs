//! Path reconstruction and costing

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Node};
use std::collections::HashMap;

/// Follow predecessor pointers back from `goal`, returning the path start-first
pub fn reconstruct_path<'g>(came_from: &HashMap<&str, &'g Node>, goal: &'g Node) -> Vec<Node> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(&previous) = came_from.get(current.id()) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}

/// Sum of edge weights along consecutive nodes of `nodes`.
///
/// Fails with `NotAnEdge` if two consecutive nodes are not adjacent.
pub fn path_cost(provider: &dyn GraphProvider, nodes: &[Node]) -> Result<Cost> {
    let mut total = Cost::ZERO;
    for pair in nodes.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        provider.require_node(from.id())?;
        let weight = provider
            .get_weighted_neighbors(from.id())
            .into_iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|(_, weight)| weight)
            .ok_or_else(|| GraphError::NotAnEdge {
                from: from.id.clone(),
                to: to.id.clone(),
            })?;
        total = total + weight;
    }
    Ok(total)
}
